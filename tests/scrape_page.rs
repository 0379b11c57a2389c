// tests/scrape_page.rs
//
// Offline runs of the whole pipeline (minus the fetch) over a captured-style page.
//
use qaplib_scrape::classify::Category;
use qaplib_scrape::config::consts::NOT_FOUND_CLAUSE;
use qaplib_scrape::{scrape_html, specs::instances};

const PAGE: &str = r##"<HTML>
<HEAD><TITLE>QAPLIB - Problem Instances and Solutions</TITLE></HEAD>
<BODY>
<H3><A NAME="Bu">Burkard and Offermann</A></H3>
<PRE>
<b>Name     n       Feas.Sol.  (OPT/Bound)</b>
<a href="data.d/bur26a.dat">Bur26a</a>    26    5426670 (OPT)      <a href="soln.d/bur26a.sln">(1.0)</a>
<a href="data.d/bur26b.dat">Bur26b</a>    26    3817852 (OPT)      <a href="soln.d/bur26b.sln">(1.0)</a>
</PRE>
<H3><A NAME="Es">Eschermann and Wunderlich</A></H3>
<pre>
<a href="data.d/esc16a.dat">Esc16a</a><a href="#esc">*</a>    16         68 (OPT)
<a href="data.d/esc32a.dat">Esc32a</a>    32  <a href="soln.d/esc32a.sln">130</a> (OPT)
</pre>
<H3><A NAME="Ta">Taillard</A></H3>
<pre>
<a href="data.d/tai12a.dat">Tai12a</a>    12     224416 (OPT)
<a href="data.d/tai12b.dat">Tai12b</a>    12   <a href="soln.d/tai12b.sln">39464925</a>  (OPT)
<a href="data.d/tai64c.dat">Tai64c</a>    64    1855928 (Ro-TS)
<a href="data.d/lipa20a.dat">Lipa20a</a>   20       3683 (OPT)
</pre>
<p>Footnote <a name="esc">*</a>: symmetric flow.</p>
</BODY></HTML>
"##;

#[test]
fn every_table_is_extracted_plain_rows_first() {
    let t = instances::extract(PAGE);
    assert_eq!(
        t.names(),
        &["bur26a", "bur26b", "esc16a", "esc32a", "tai12a", "tai64c", "lipa20a", "tai12b"]
    );
    assert_eq!(
        t.optimal(),
        &["5426670", "3817852", "68", "130", "224416", "1855928", "3683", "39464925"]
    );
    assert_eq!(t.algorithms()[5], "ro-ts");
    assert_eq!(t.names().len(), t.optimal().len());
    assert_eq!(t.optimal().len(), t.algorithms().len());
}

#[test]
fn categories_follow_names() {
    let s = scrape_html(PAGE).unwrap();
    assert_eq!(
        s.categories,
        vec![
            Category::III,
            Category::III,
            Category::III,
            Category::III,
            Category::I,
            Category::III,
            Category::Unknown,
            Category::IV,
        ]
    );
}

#[test]
fn generated_text_has_three_expressions() {
    let s = scrape_html(PAGE).unwrap();
    let text = s.code.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.starts_with(r#"o == "bur26a" ? "#));
        assert!(line.ends_with(NOT_FOUND_CLAUSE));
        assert_eq!(line.matches(" ? ").count(), 8);
    }
    assert!(lines[0].contains(r#"o == "esc32a" ? 130 : "#));
    assert!(lines[1].contains(r#"o == "tai12b" ? "opt" : "#));
    assert!(lines[2].contains(r#"o == "tai12b" ? "[IV]" : "#));
}

#[test]
fn same_page_same_bytes() {
    let a = scrape_html(PAGE).unwrap().code.text();
    let b = scrape_html(PAGE).unwrap().code.text();
    assert_eq!(a, b);
}

#[test]
fn page_without_pre_blocks() {
    let s = scrape_html("<html><body><p>moved</p></body></html>").unwrap();
    assert_eq!(s.summary(), "0 instances scraped.");
    assert_eq!(
        s.code.text(),
        format!("{NOT_FOUND_CLAUSE}\n{NOT_FOUND_CLAUSE}\n{NOT_FOUND_CLAUSE}\n")
    );
}
