//! Static export: every page in every locale as plain files.

use kku_core::error::GatewayError;
use kku_core::Locale;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::pages::{self, LinkStyle, Page, View};

fn page_file(root: &Path, page: Page) -> PathBuf {
    let dir = if page.slug().is_empty() {
        root.to_path_buf()
    } else {
        root.join(page.slug())
    };
    dir.join("index.html")
}

fn write_page(path: &Path, html: &str) -> Result<(), GatewayError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// Write `<out>/<lang>/<page>/index.html` for every locale, plus the default
/// locale at `<out>/<page>/index.html`. Links use the `/<lang>/<page>/` form so
/// language switching works on any static host. Returns the number of files written.
pub fn export_site(out: &Path) -> Result<usize, GatewayError> {
    let mut written = 0;
    for locale in Locale::ALL {
        let view = View::new(locale.into(), LinkStyle::Static);
        let locale_root = out.join(locale.code());
        for page in Page::ALL {
            let html = pages::render(page, &view);
            write_page(&page_file(&locale_root, page), &html)?;
            written += 1;
            if locale == Locale::DEFAULT {
                write_page(&page_file(out, page), &html)?;
                written += 1;
            }
        }
    }
    info!("exported {written} pages to {}", out.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Site-relative `href` and `action` targets in `html`.
    fn local_links(html: &str) -> Vec<&str> {
        let mut links = Vec::new();
        for attr in ["href=\"/", "action=\"/"] {
            let mut rest = html;
            while let Some(start) = rest.find(attr) {
                let tail = &rest[start + attr.len() - 1..];
                let end = tail.find('"').unwrap();
                links.push(&tail[..end]);
                rest = &tail[end..];
            }
        }
        links
    }

    #[test]
    fn test_export_writes_every_locale_and_default_root() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_site(dir.path()).unwrap();
        assert_eq!(written, Locale::ALL.len() * Page::ALL.len() + Page::ALL.len());

        let root_home = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(root_home.contains("<html lang=\"ko\">"));

        let en_arrival =
            std::fs::read_to_string(dir.path().join("en/arrival/index.html")).unwrap();
        assert!(en_arrival.contains("After Arrival"));

        assert!(dir.path().join("kk/campus-life/index.html").exists());
        assert!(dir.path().join("programs/index.html").exists());
    }

    #[test]
    fn test_every_exported_link_serves_its_locale() {
        let dir = tempfile::tempdir().unwrap();
        export_site(dir.path()).unwrap();

        for locale in Locale::ALL {
            for page in Page::ALL {
                let file = page_file(&dir.path().join(locale.code()), page);
                let html = std::fs::read_to_string(&file).unwrap();
                let links = local_links(&html);
                assert!(!links.is_empty());
                for link in links {
                    assert!(!link.contains('?'), "{link} in {}", file.display());
                    let code = link.trim_matches('/').split('/').next().unwrap();
                    let target = dir.path().join(link.trim_start_matches('/')).join("index.html");
                    let served = std::fs::read_to_string(&target)
                        .unwrap_or_else(|_| panic!("{link} in {} has no file", file.display()));
                    assert!(served.contains(&format!("<html lang=\"{code}\">")), "{link}");
                }
            }
        }
    }

    #[test]
    fn test_english_selector_entry_leads_to_english_page() {
        let dir = tempfile::tempdir().unwrap();
        export_site(dir.path()).unwrap();
        let ko_arrival = std::fs::read_to_string(dir.path().join("ko/arrival/index.html")).unwrap();
        assert!(ko_arrival.contains("href=\"/en/arrival/\" hreflang=\"en\""));
        let en_arrival = std::fs::read_to_string(dir.path().join("en/arrival/index.html")).unwrap();
        assert!(en_arrival.contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        assert!(matches!(export_site(&blocker), Err(GatewayError::Io(_))));
    }
}
