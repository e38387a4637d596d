//! Citation filtering.

use mrisafe_types::GroundingChunk;

/// Keeps only chunks that carry both a URI and a title, preserving the
/// order the AI service returned them in. Entries missing either field are
/// dropped silently; empty input yields empty output.
pub fn filter_citable(chunks: Vec<GroundingChunk>) -> Vec<GroundingChunk> {
    chunks.into_iter().filter(|c| c.is_citable()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrisafe_types::WebSource;

    fn chunk(uri: Option<&str>, title: Option<&str>) -> GroundingChunk {
        GroundingChunk {
            web: Some(WebSource {
                uri: uri.map(str::to_owned),
                title: title.map(str::to_owned),
            }),
        }
    }

    #[test]
    fn test_keeps_only_fully_populated_chunks() {
        let input = vec![
            chunk(Some("https://a.example"), Some("A")),
            chunk(Some(""), Some("B")),
            chunk(None, Some("C")),
            chunk(Some("https://d.example"), None),
            GroundingChunk { web: None },
            chunk(Some("https://e.example"), Some("E")),
        ];

        let kept = filter_citable(input);
        let uris: Vec<_> = kept
            .iter()
            .map(|c| c.web.as_ref().and_then(|w| w.uri.as_deref()).unwrap_or(""))
            .collect();
        assert_eq!(uris, vec!["https://a.example", "https://e.example"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_citable(Vec::new()).is_empty());
    }
}
