use pretty_assertions::assert_eq;
use rstest::rstest;
use std::thread;

use versewrap::dom::{Document, NodeId};
use versewrap::parse::parse_html;
use versewrap::{wrap_passages, wrap_verses, VerseConfig};

const JOHN: &str = include_str!("fixtures/john3_16-18.html");
const PSALM: &str = include_str!("fixtures/psalm23_1-3.html");

fn wrap(html: &str) -> String {
    wrap_verses(html, &VerseConfig::default()).expect("wrap")
}

fn body(doc: &Document) -> NodeId {
    doc.find_element(doc.root(), "body").expect("body")
}

fn elements_with_class<'a>(
    doc: &'a Document,
    class: &'a str,
) -> impl Iterator<Item = NodeId> + 'a {
    doc.descendants(doc.root())
        .filter(move |&id| doc.node(id).attr("class") == Some(class))
}

fn is_inside(doc: &Document, id: NodeId, ancestor: NodeId) -> bool {
    let mut cur = doc.parent(id);
    while let Some(p) = cur {
        if p == ancestor {
            return true;
        }
        cur = doc.parent(p);
    }
    false
}

#[rstest]
#[case::prose(JOHN)]
#[case::poetry(PSALM)]
fn text_survives_in_order(#[case] html: &str) {
    let before = parse_html(html).expect("parse");
    let after = parse_html(&wrap(html)).expect("parse output");
    assert_eq!(
        after.text_content(body(&after)),
        before.text_content(body(&before))
    );
}

#[rstest]
#[case::prose(JOHN)]
#[case::poetry(PSALM)]
fn wrappers_belong_to_exactly_one_anchor(#[case] html: &str) {
    let out = parse_html(&wrap(html)).expect("parse output");
    let anchors: Vec<NodeId> = elements_with_class(&out, "va").collect();

    let wrappers: Vec<NodeId> = elements_with_class(&out, "verse").collect();
    assert!(!wrappers.is_empty());
    for wrapper in wrappers {
        let verse = out.node(wrapper).attr("data-verse").expect("data-verse");
        let owners: Vec<NodeId> = anchors
            .iter()
            .copied()
            .filter(|&a| out.node(a).attr("rel") == Some(verse))
            .collect();
        assert_eq!(owners.len(), 1, "verse {verse}");
        assert!(!is_inside(&out, owners[0], wrapper), "verse {verse}");
    }
}

#[test]
fn prose_verses_are_wrapped() {
    let out = wrap(JOHN);
    assert!(out.contains(
        r#"<a class="va" rel="v43003016"></a><span class="verse" data-verse="v43003016">“For God so loved the world,<sup class="footnote">"#
    ));
    assert!(out.contains(
        r#"<a class="va" rel="v43003017"></a><span class="verse" data-verse="v43003017">For God did not send his Son"#
    ));
    assert!(out.contains(
        r#"<a class="va" rel="v43003018"></a><span class="verse" data-verse="v43003018">Whoever believes in him"#
    ));
    assert_eq!(out.matches(r#"class="verse""#).count(), 3);
}

#[test]
fn headings_and_footnotes_pass_through() {
    let out = wrap(JOHN);
    assert!(out.starts_with(r#"<h2 class="extra_text">John 3:16–18</h2>"#));
    assert!(out.contains(r#"<h3 id="p43003016_01-1">For God So Loved the World</h3>"#));
    assert!(out.contains(
        r##"<p><span class="footnote"><a href="#f1">[1]</a></span> <span class="footnote-ref">3:16</span> Or <em>For this is how God loved the world</em></p>"##
    ));
}

#[test]
fn output_has_no_document_wrappers() {
    let out = wrap(JOHN);
    for tag in ["<html", "<head", "<body", "</body>", "</html>"] {
        assert!(!out.contains(tag), "{tag}");
    }
}

#[test]
fn poetry_is_grouped_per_line() {
    let out = wrap(PSALM);
    assert!(out.contains(concat!(
        r#"<span id="p19023001_01-1" class="line"><a class="va" rel="v19023001"></a>"#,
        r#"<span class="verse" data-verse="v19023001"><b class="chapter-num" id="v19023001-1">23:1&nbsp;</b>"#,
        r#"The <span class="divine-name">Lord</span> is my shepherd; I shall not want.</span></span>"#,
    )));
    assert!(out.contains(concat!(
        r#"<span id="p19023002_01-1" class="indent line"><a class="va" rel="v19023002"></a>"#,
        r#"<span class="verse" data-verse="v19023002">He makes me lie down in green pastures.</span></span>"#,
    )));
}

#[test]
fn anchor_closing_a_line_gets_no_wrapper() {
    let out = wrap(PSALM);
    assert!(out.contains(
        r#"<span id="p19023002_01-1" class="line">He leads me beside still waters.<a class="va" rel="v19023003"></a></span>"#
    ));
    assert!(!out.contains(r#"data-verse="v19023003""#));
    assert!(out.contains(r#"<span id="p19023003_01-1" class="indent line">He restores my soul.</span>"#));
}

#[test]
fn line_group_markers_are_untouched() {
    let out = wrap(PSALM);
    assert!(out.contains(r#"<p class="block-indent"><span class="begin-line-group"></span>"#));
    assert!(out.contains(r#"<span class="end-line-group"></span>"#));
}

#[test]
fn verse_numbers_stay_outside_wrappers() {
    let out = wrap(concat!(
        r#"<p><a class="va" rel="v1"></a><b class="verse-num" id="v1-1">1&nbsp;</b>In the beginning "#,
        r#"<a class="va" rel="v2"></a>was the Word</p>"#,
    ));
    assert_eq!(
        out,
        concat!(
            r#"<p><a class="va" rel="v1"></a><b class="verse-num" id="v1-1">1&nbsp;</b>In the beginning "#,
            r#"<a class="va" rel="v2"></a><span class="verse" data-verse="v2">was the Word</span></p>"#,
        )
    );
}

#[test]
fn passages_join_like_one_document() {
    let joined = wrap_passages(&[JOHN, PSALM], &VerseConfig::default()).expect("wrap");
    assert_eq!(joined, wrap(&format!("{JOHN}{PSALM}")));
    assert_eq!(joined.matches(r#"class="verse""#).count(), 5);
}

#[test]
fn custom_markup_tokens() {
    let cfg = VerseConfig::default()
        .with_anchor_class("verse-anchor")
        .with_number_class("num")
        .with_id_prefix("ref:")
        .with_wrapper("span", "v", "data-ref");
    let out = wrap_verses(
        r#"<p><a class="verse-anchor" rel="ref:1"></a>one <b class="num">2</b>two<a class="va" rel="v3"></a>three</p>"#,
        &cfg,
    )
    .expect("wrap");
    assert_eq!(
        out,
        r#"<p><a class="verse-anchor" rel="ref:1"></a><span class="v" data-ref="ref:1">one </span><b class="num">2</b>two<a class="va" rel="v3"></a>three</p>"#
    );
}

#[test]
fn calls_are_independent_across_threads() {
    let expected = (wrap(JOHN), wrap(PSALM));
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| (wrap(JOHN), wrap(PSALM))))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), expected);
    }
}
