use jsonref_path::{parse_path, Path, PathSegment};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = PathSegment> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_-]{0,8}".prop_map(PathSegment::Key),
        (0usize..100_000).prop_map(PathSegment::Index),
    ]
}

proptest! {
    #[test]
    fn formatted_paths_parse_back(segments in prop::collection::vec(segment(), 1..12)) {
        let path = Path::from_segments(segments);
        let parsed = parse_path(&path.to_string()).expect("formatted path parses");
        prop_assert_eq!(parsed, path);
    }

    #[test]
    fn prefixes_are_prefixes(segments in prop::collection::vec(segment(), 1..12), cut in 0usize..12) {
        let path = Path::from_segments(segments);
        let prefix = path.prefix(cut);
        prop_assert!(prefix.is_prefix_of(&path));
        prop_assert!(prefix.len() <= path.len());
    }
}
