use bstr::BStr;
use frontsplit_syntax::{ItemKind, io, scan, split};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ));
    io::read_document(&path).unwrap()
}

#[rstest]
#[case::toml(
    "toml_note",
    ItemKind::Toml,
    "title = \"Weekly review\"\ntags = [\"review\", \"weekly\"]\n\n[extra]\nmood = \"good\"",
    "# Weekly review\n\n- [[Project A]] shipped\n- Follow up on --- separators\n"
)]
#[case::yaml(
    "yaml_note",
    ItemKind::Yaml,
    "title: Reading list\naliases:\n  - books",
    "# Reading list\n\n+++ not a fence here\n"
)]
#[case::json(
    "json_note",
    ItemKind::Json,
    "{\n  \"title\": \"Sketch {draft}\",\n  \"quote\": \"she said \\\"hi\\\"\",\n  \"meta\": {\"words\": 120}\n}",
    "# Sketch\n\nSome {braces} in the body.\n"
)]
fn fixture_with_frontmatter(
    #[case] name: &str,
    #[case] kind: ItemKind,
    #[case] frontmatter: &str,
    #[case] content: &str,
) {
    let input = fixture(name);
    let items = scan(&input);

    assert_eq!(items.len(), 3);
    assert_eq!(
        (items[0].kind, &*items[0].value),
        (kind, BStr::new(frontmatter))
    );
    assert_eq!(
        (items[1].kind, &*items[1].value),
        (ItemKind::Content, BStr::new(content))
    );
    assert!(items[2].is_eof());
}

#[test]
fn fixture_plain_note_is_all_content() {
    let input = fixture("plain_note");
    let doc = split(&input).unwrap();

    assert_eq!(doc.frontmatter, None);
    assert_eq!(&*doc.content, BStr::new(&input));
}

#[test]
fn fixture_latin1_note_keeps_its_bytes() {
    let input = fixture("latin1_note");
    let items = scan(&input);

    assert_eq!(items.len(), 3);
    assert_eq!(
        (items[0].kind, &*items[0].value),
        (ItemKind::Yaml, BStr::new(b"author: Ren\xe9"))
    );
    assert_eq!(&*items[1].value, BStr::new(b"# Caf\xe9 notes\n"));
    assert!(items[2].is_eof());
}

#[test]
fn fixture_unclosed_yaml_is_an_error() {
    let input = fixture("unclosed_yaml");
    let items = scan(&input);

    assert_eq!(items.len(), 1);
    assert!(items[0].is_error());
    assert_eq!(
        &*items[0].value,
        "EOF looking for end YAML front matter delimiter"
    );
}
