//! Whole-document conversion tests.
//!
//! Single-line renderings are pinned with `insta` inline snapshots; outputs
//! that contain line breaks use plain equality so the newlines stay explicit.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    error::ConvertError,
    html::RenderError,
    parsing::{markdown_to_html, markdown_to_html_node},
};

fn render(md: &str) -> String {
    markdown_to_html(md).unwrap()
}

#[test]
fn heading_then_paragraph() {
    assert_snapshot!(render("# Title\n\nBody"), @"<div><h1>Title</h1><p>Body</p></div>");
}

#[test]
fn unordered_list() {
    assert_snapshot!(render("- one\n- two"), @"<div><ul><li>one</li><li>two</li></ul></div>");
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    assert_snapshot!(
        render(md),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn all_heading_levels() {
    let md = "
# heading 1

## heading 2

### heading 3

#### heading 4

##### heading 5

###### heading 6

";
    assert_snapshot!(
        render(md),
        @"<div><h1>heading 1</h1><h2>heading 2</h2><h3>heading 3</h3><h4>heading 4</h4><h5>heading 5</h5><h6>heading 6</h6></div>"
    );
}

#[test]
fn code_block_keeps_inline_syntax_and_newlines() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        render(md),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff</code></pre></div>"
    );
}

#[test]
fn quote_keeps_interior_newlines() {
    assert_eq!(
        render("\n> this is\n> a quote\n\n"),
        "<div><blockquote>this is\na quote</blockquote></div>"
    );
}

#[test]
fn ordered_list() {
    assert_snapshot!(
        render("\n1. this is\n2. a ordered list\n\n"),
        @"<div><ol><li>this is</li><li>a ordered list</li></ol></div>"
    );
}

#[test]
fn broken_numbering_falls_back_to_paragraph() {
    assert_snapshot!(render("1. a\n3. b"), @"<div><p>1. a 3. b</p></div>");
}

#[test]
fn links_and_images_in_a_paragraph() {
    assert_snapshot!(
        render("See ![logo](/images/logo.png) on the [home page](/)."),
        @r#"<div><p>See <img src="/images/logo.png" alt="logo"></img> on the <a href="/">home page</a>.</p></div>"#
    );
}

#[test]
fn mixed_document() {
    let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the legendarium
- It can be enjoyed by children and adults alike

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println(\"Hello, World!\")
}
```";
    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>"#,
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"\n\n-- J.R.R. Tolkien</blockquote>",
        "<h2>Reasons I like Tolkien</h2>",
        "<ul><li>You can spend years studying the legendarium</li><li>It can be enjoyed by children and adults alike</li></ul>",
        "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
        "<pre><code>func main(){\n    fmt.Println(\"Hello, World!\")\n}</code></pre>",
        "</div>",
    );
    assert_eq!(render(md), expected);
}

#[test]
fn root_children_follow_document_order() {
    let root = markdown_to_html_node("# a\n\nb\n\n- c").unwrap();
    assert_eq!(root.tag(), Some("div"));
    let tags: Vec<_> = root.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul")]);
}

#[rstest]
#[case("a **b", "**")]
#[case("_a", "_")]
#[case("`code", "`")]
#[case("# heading with `tick", "`")]
#[case("- ok\n- **broken", "**")]
fn unbalanced_delimiters_fail_the_whole_document(#[case] md: &str, #[case] delimiter: &str) {
    let full = format!("# fine\n\n{md}\n\nalso fine");
    match markdown_to_html(&full) {
        Err(ConvertError::UnbalancedDelimiter { delimiter: d, .. }) => assert_eq!(d, delimiter),
        other => panic!("expected unbalanced delimiter, got {other:?}"),
    }
}

#[test]
fn empty_document_has_nothing_to_render() {
    assert_eq!(
        markdown_to_html("\n\n"),
        Err(ConvertError::Render(RenderError::MissingChildren {
            tag: "div".to_string()
        }))
    );
}

#[test]
fn conversion_is_deterministic() {
    let md = "# t\n\n*x* and **y**\n\n> q";
    assert_eq!(markdown_to_html(md), markdown_to_html(md));
}

#[test]
fn fence_with_indented_blank_line() {
    let md = "# T\n\n```\nfn main() {\n    \n}\n```";
    assert_eq!(
        render(md),
        "<div><h1>T</h1><pre><code>fn main() {\n    \n}</code></pre></div>"
    );
}

#[test]
fn whitespace_only_line_stays_in_paragraph() {
    assert_eq!(
        render("first line\n   \nsecond line"),
        "<div><p>first line     second line</p></div>"
    );
}

#[test]
fn crlf_document_renders_like_lf() {
    let crlf = "# Title\r\n\r\na\r\nb\r\n\r\n> one\r\n> two\r\n";
    let lf = "# Title\n\na\nb\n\n> one\n> two\n";
    assert_eq!(render(crlf), render(lf));
    assert_eq!(
        render(crlf),
        "<div><h1>Title</h1><p>a b</p><blockquote>one\ntwo</blockquote></div>"
    );
}
