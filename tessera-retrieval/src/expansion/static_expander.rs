//! Built-in synonym expansion for civic-document queries.
//!
//! Maps common query terms to related terms to improve recall.
//! E.g., "체육시설" → "운동시설 스포츠시설 체육관".

use std::collections::HashMap;

use tessera_core::traits::ISynonymExpander;

/// Per-term cap on appended synonyms to avoid query bloat.
const MAX_EXPANSIONS_PER_TERM: usize = 5;

/// Domain synonym map for municipal facilities, services and notices.
fn synonym_map() -> HashMap<&'static str, &'static [&'static str]> {
    let mut m = HashMap::new();
    m.insert(
        "체육시설",
        &["운동시설", "스포츠시설", "체육관", "운동장"][..],
    );
    m.insert("운동시설", &["체육시설", "스포츠시설"]);
    m.insert("금연구역", &["흡연금지구역", "금연지역", "비흡연구역"]);
    m.insert("주차장", &["주차시설", "주차공간", "공영주차장"]);
    m.insert("도서관", &["도서실", "작은도서관", "열람실"]);
    m.insert("쓰레기", &["폐기물", "생활폐기물", "분리수거", "재활용"]);
    m.insert("민원", &["민원신청", "민원처리", "신고"]);
    m.insert("보조금", &["지원금", "교부금", "장려금"]);
    m.insert("어린이집", &["보육시설", "유치원", "돌봄시설"]);
    m.insert("공원", &["근린공원", "소공원", "녹지"]);
    m.insert("버스", &["시내버스", "마을버스", "대중교통"]);
    m.insert("수수료", &["이용료", "사용료", "요금"]);
    m.insert("regulation", &["ordinance", "rule", "bylaw"]);
    m.insert("permit", &["license", "approval", "registration"]);
    m.insert("facility", &["venue", "amenity", "infrastructure"]);
    m
}

/// Expander backed by the built-in domain map. Pure and stateless;
/// unknown terms pass through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSynonymExpander;

impl StaticSynonymExpander {
    pub fn new() -> Self {
        Self
    }
}

impl ISynonymExpander for StaticSynonymExpander {
    /// Returns the input keywords followed by their expansions, each
    /// appended at most once.
    fn expand(&self, keywords: &[String]) -> Vec<String> {
        let map = synonym_map();
        let mut expanded: Vec<String> = keywords.to_vec();

        for keyword in keywords {
            let lower = keyword.to_lowercase();
            let Some(synonyms) = map.get(lower.as_str()) else {
                continue;
            };
            for synonym in synonyms.iter().take(MAX_EXPANSIONS_PER_TERM) {
                if !expanded
                    .iter()
                    .any(|existing| existing.eq_ignore_ascii_case(synonym))
                {
                    expanded.push((*synonym).to_string());
                }
            }
        }
        expanded
    }
}
