//! Property-based tests: the tree fold agrees with a flat fold of every file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lexstat_content::TextExtractor;
use lexstat_core::TreeWalk;
use lexstat_model::ContentStats;
use lexstat_store::{MemoryStore, SummaryStore};
use lexstat_syllable::Unhyphenated;
use lexstat_walk::WalkStep;
use proptest::prelude::*;

struct MapExtractor(BTreeMap<PathBuf, String>);

impl TextExtractor for MapExtractor {
    fn extract(&self, path: &Path) -> String {
        self.0.get(path).cloned().unwrap_or_default()
    }
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-d]{1,4}|[а-г]{1,4}", 0..8).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn tree_fold_matches_flat_fold(
        texts in prop::collection::vec(text_strategy(), 1..6),
        split in 0usize..6,
    ) {
        // Files are spread over the root and one subdirectory.
        let split = split.min(texts.len());
        let mut map = BTreeMap::new();
        let mut root_files = Vec::new();
        let mut sub_files = Vec::new();
        for (i, text) in texts.iter().enumerate() {
            let path = if i < split {
                PathBuf::from(format!("r/sub/{i}.txt"))
            } else {
                PathBuf::from(format!("r/{i}.txt"))
            };
            if i < split { sub_files.push(path.clone()) } else { root_files.push(path.clone()) }
            map.insert(path, text.clone());
        }
        let extractor = MapExtractor(map);

        let steps = vec![
            WalkStep { path: PathBuf::from("r/sub"), subdirs: vec![], files: sub_files },
            WalkStep { path: PathBuf::from("r"), subdirs: vec![PathBuf::from("r/sub")], files: root_files },
        ];
        let mut store = MemoryStore::new();
        let root = TreeWalk::new(&extractor, &Unhyphenated, &mut store)
            .run(Path::new("r"), steps)
            .unwrap();

        let flat = ContentStats::from_text(&texts.join(" "), &Unhyphenated);
        prop_assert_eq!(root.stats.word_count(), flat.word_count());
        prop_assert_eq!(root.stats.words(), flat.words());
        prop_assert_eq!(root.stats.consonants(), flat.consonants());
        prop_assert!((root.stats.average_word_length() - flat.average_word_length()).abs() < 1e-9);
        prop_assert_eq!(root.summary.file_count, texts.len());
        prop_assert_eq!(store.files().len(), texts.len());
        prop_assert_eq!(
            &root.summary.content.most_frequent_words,
            &flat.summarize().most_frequent_words
        );
    }
}
