// src/scrape.rs
//
// fetch → extract → classify → generate. No state survives a call.

use crate::{
    classify::{self, Category},
    codegen::{self, GeneratedCode},
    core::net,
    data::{Instance, InstanceTable},
    error::Result,
    progress::Progress,
    specs::instances,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scraped {
    pub table: InstanceTable,
    pub categories: Vec<Category>,
    pub code: GeneratedCode,
}

impl Scraped {
    pub fn len(&self) -> usize { self.table.len() }

    pub fn is_empty(&self) -> bool { self.table.is_empty() }

    /// Status line text.
    pub fn summary(&self) -> String {
        format!("{} instances scraped.", self.len())
    }

    pub fn instances(&self) -> Vec<Instance> {
        self.table
            .rows()
            .zip(&self.categories)
            .map(|((name, optimal, algorithm), cat)| Instance {
                name: s!(name),
                optimal: s!(optimal),
                algorithm: s!(algorithm),
                category: *cat,
            })
            .collect()
    }

    /// Instance rows as TSV, no header line.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for inst in self.instances() {
            out.push_str(&inst.cells().join("\t"));
            out.push('\n');
        }
        out
    }
}

/// Everything after the fetch. Pure.
pub fn scrape_html(html: &str) -> Result<Scraped> {
    let table = instances::extract(html);
    let categories = classify::classify_all(table.names());
    let code = codegen::render(&table, &categories)?;

    let unknown = categories.iter().filter(|c| **c == Category::Unknown).count();
    if unknown > 0 {
        logd!("Classify: {} of {} name(s) unmatched", unknown, categories.len());
    }

    Ok(Scraped { table, categories, code })
}

pub fn scrape(url: &str, mut progress: Option<&mut dyn Progress>) -> Result<Scraped> {
    let url = url.trim();
    logf!("Scrape: Begin url={}", url);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(url);
        p.log(&format!("Fetching {url}"));
    }

    let res = net::http_get(url).and_then(|html| {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Parsing {} bytes", html.len()));
        }
        scrape_html(&html)
    });

    match &res {
        Ok(s) => logf!("Scrape: OK rows={}", s.len()),
        Err(e) => loge!("Scrape: Error url={}: {}", url, e),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(res.as_ref().ok().map(|s| s.len()));
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::config::consts::NOT_FOUND_CLAUSE;

    const PAGE: &str = "<html><body>\n\
        <h3>Nugent et al.</h3>\n\
        <pre>\n\
        <a href=\"data.d/nug12.dat\">Nug12</a>    12       578 (OPT)\n\
        <a href=\"data.d/tai20a.dat\">Tai20a</a>   20    703482 (RO-TS)\n\
        <a href=\"data.d/lipa20a.dat\">Lipa20a</a>  20      3683 (OPT)\n\
        </pre>\n\
        </body></html>";

    #[test]
    fn scrape_html_end_to_end() {
        let s = scrape_html(PAGE).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.summary(), "3 instances scraped.");
        assert_eq!(s.categories, vec![Category::II, Category::I, Category::Unknown]);
        assert!(s.code.category.contains(r#"o == "lipa20a" ? "[?]" : "#));
        assert!(s.code.optimal.starts_with(r#"o == "nug12" ? 578 : "#));
    }

    #[test]
    fn empty_page_yields_fallback_only() {
        let s = scrape_html("<html></html>").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.code.optimal, NOT_FOUND_CLAUSE);
        assert_eq!(s.code.algorithm, NOT_FOUND_CLAUSE);
        assert_eq!(s.code.category, NOT_FOUND_CLAUSE);
    }

    #[test]
    fn tsv_rows() {
        let s = scrape_html(PAGE).unwrap();
        let tsv = s.to_tsv();
        let first = tsv.lines().next().unwrap();
        assert_eq!(first, "nug12\t578\topt\t[II]");
        assert_eq!(tsv.lines().count(), 3);
    }

    struct Recorder(Vec<String>);
    impl Progress for Recorder {
        fn begin(&mut self, url: &str) { self.0.push(format!("begin {url}")); }
        fn log(&mut self, msg: &str) { self.0.push(s!(msg)); }
        fn finish(&mut self, found: Option<usize>) { self.0.push(format!("finish {found:?}")); }
    }

    #[test]
    fn empty_url_reports_failure_to_progress() {
        let mut rec = Recorder(Vec::new());
        let res = scrape("  ", Some(&mut rec));
        assert!(matches!(res, Err(Error::EmptyUrl)));
        assert_eq!(rec.0.first().map(String::as_str), Some("begin "));
        assert_eq!(rec.0.last().map(String::as_str), Some("finish None"));
    }
}
