//! Korean place names mapped to the English names the provider understands.
//!
//! Lookups are exact matches on the trimmed input. Anything not in the table
//! is passed through unchanged so the provider can try to resolve it itself.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Alias table in declaration order. Suggestions follow this order.
static CITY_ALIASES: &[(&str, &str)] = &[
    // 국내
    ("서울", "Seoul"),
    ("부산", "Busan"),
    ("대구", "Daegu"),
    ("인천", "Incheon"),
    ("광주", "Gwangju"),
    ("대전", "Daejeon"),
    ("울산", "Ulsan"),
    ("수원", "Suwon"),
    ("고양", "Goyang"),
    ("용인", "Yongin"),
    ("창원", "Changwon"),
    ("성남", "Seongnam"),
    ("청주", "Cheongju"),
    ("부천", "Bucheon"),
    ("화성", "Hwaseong"),
    ("남양주", "Namyangju"),
    ("전주", "Jeonju"),
    ("천안", "Cheonan"),
    ("안산", "Ansan"),
    ("안양", "Anyang"),
    ("포항", "Pohang"),
    ("의정부", "Uijeongbu"),
    ("원주", "Wonju"),
    ("춘천", "Chuncheon"),
    ("진주", "Jinju"),
    ("순천", "Suncheon"),
    ("목포", "Mokpo"),
    ("제주", "Jeju"),
    ("제주도", "Jeju"),
    // 해외
    ("도쿄", "Tokyo"),
    ("오사카", "Osaka"),
    ("교토", "Kyoto"),
    ("요코하마", "Yokohama"),
    ("베이징", "Beijing"),
    ("상하이", "Shanghai"),
    ("홍콩", "Hong Kong"),
    ("타이베이", "Taipei"),
    ("방콕", "Bangkok"),
    ("싱가포르", "Singapore"),
    ("쿠알라룸푸르", "Kuala Lumpur"),
    ("자카르타", "Jakarta"),
    ("마닐라", "Manila"),
    ("하노이", "Hanoi"),
    ("호치민", "Ho Chi Minh City"),
    ("뉴욕", "New York"),
    ("로스앤젤레스", "Los Angeles"),
    ("시카고", "Chicago"),
    ("라스베이거스", "Las Vegas"),
    ("샌프란시스코", "San Francisco"),
    ("워싱턴", "Washington"),
    ("보스턴", "Boston"),
    ("시애틀", "Seattle"),
    ("런던", "London"),
    ("파리", "Paris"),
    ("베를린", "Berlin"),
    ("로마", "Rome"),
    ("마드리드", "Madrid"),
    ("바르셀로나", "Barcelona"),
    ("암스테르담", "Amsterdam"),
    ("취리히", "Zurich"),
    ("비엔나", "Vienna"),
    ("프라하", "Prague"),
    ("모스크바", "Moscow"),
    ("상트페테르부르크", "Saint Petersburg"),
    ("시드니", "Sydney"),
    ("멜버른", "Melbourne"),
    ("토론토", "Toronto"),
    ("밴쿠버", "Vancouver"),
    ("상파울루", "São Paulo"),
    ("리우데자네이루", "Rio de Janeiro"),
    ("부에노스아이레스", "Buenos Aires"),
    ("카이로", "Cairo"),
    ("이스탄불", "Istanbul"),
    ("두바이", "Dubai"),
    ("뭄바이", "Mumbai"),
    ("델리", "Delhi"),
    ("방갈로르", "Bangalore"),
];

static ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CITY_ALIASES.iter().copied().collect());

/// All aliases as `(korean, english)` pairs, in table order.
pub fn aliases() -> &'static [(&'static str, &'static str)] {
    CITY_ALIASES
}

/// Translate a user-typed city name into the provider's canonical form.
///
/// Returns the trimmed input unchanged when it has no alias.
pub fn resolve(raw: &str) -> String {
    let trimmed = raw.trim();
    match ALIAS_INDEX.get(trimmed) {
        Some(english) => (*english).to_string(),
        None => trimmed.to_string(),
    }
}

/// Alias keys containing `partial`, at most [`MAX_SUGGESTIONS`] of them.
pub fn suggest(partial: &str) -> Vec<&'static str> {
    if partial.is_empty() {
        return Vec::new();
    }

    CITY_ALIASES
        .iter()
        .map(|(korean, _)| *korean)
        .filter(|korean| korean.contains(partial) || korean.starts_with(partial))
        .take(MAX_SUGGESTIONS)
        .collect()
}
