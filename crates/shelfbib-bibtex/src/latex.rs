//! LaTeX companion document
//!
//! A minimal apacite test document that cites every entry in the
//! generated bibliography, so the `.bib` file can be exercised with a
//! plain latex + bibtex run.

use shelfbib_domain::KeyRegistry;

/// Render the test document. `bib_stem` is the bibliography file name
/// without its `.bib` extension, as `\bibliography` expects it.
pub fn format_test_document(registry: &KeyRegistry, bib_stem: &str) -> String {
    let mut doc = String::new();
    doc.push_str("\\documentclass{article}\n");
    doc.push_str("\\usepackage{apacite}\n");
    doc.push_str(&format!(
        "\\title{{Test of the \\texttt{{{bib_stem}.bib}} file}}\n"
    ));
    doc.push_str("\\begin{document}\n");
    doc.push_str("\\begin{itemize}\n");

    for (key, record) in registry.iter() {
        doc.push_str(&format!("\\item {} \\cite{{{key}}}\n", record.title));
    }

    doc.push_str("\\end{itemize}\n");
    doc.push('\n');
    doc.push_str("\\bibliographystyle{apacite}\n");
    doc.push_str(&format!("\\bibliography{{{bib_stem}}}\n"));
    doc.push_str("\\end{document}\n");
    doc
}
