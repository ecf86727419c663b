// Shared by bench targets via `mod common;`
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\nSecond line of the paragraph.\n\n- Bullet point\n- Another item with a [link](/page)\n\n1. First\n2. Second\n\n> A quote\n> over two lines\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n![image](/images/a.png)\n\n";
    base.repeat(size)
}
