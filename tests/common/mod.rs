//! Shared fixtures: a minimal portfolio checkout that satisfies every check.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use sitecheck::{Harness, MemoryProbe, Reporter, RunResult};
use termcolor::Buffer;

pub const VALID_MANIFEST: &str = r#"{
  "name": "portfolio-website",
  "version": "1.0.0",
  "type": "module",
  "scripts": { "dev": "vite", "build": "vite build", "preview": "vite preview" },
  "dependencies": {
    "framer-motion": "^11.0.0",
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.2.1",
    "tailwindcss": "^3.4.1",
    "vite": "^5.1.0"
  }
}"#;

pub fn portfolio_files() -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = [
        ("package.json", VALID_MANIFEST.to_string()),
        (
            "index.html",
            r#"<meta name="viewport" content="width=device-width" />
<meta name="description" content="Portfolio of Muhammad Hammad ur Rehman" />"#
                .to_string(),
        ),
        (
            "vite.config.js",
            "import react from '@vitejs/plugin-react'\nexport default { plugins: [react()] }".to_string(),
        ),
        ("tailwind.config.js", "export default { darkMode: 'class' }".to_string()),
        ("postcss.config.js", "export default {}".to_string()),
        (
            "src/App.jsx",
            "import Hero from './components/Hero'\nimport About from './components/About'\n<ThemeProvider><ErrorBoundary /></ThemeProvider>"
                .to_string(),
        ),
        ("src/main.jsx", String::new()),
        ("src/index.css", String::new()),
        ("src/context/ThemeContext.jsx", String::new()),
        ("src/hooks/useCustomHooks.js", String::new()),
        ("README.md", "# Portfolio".to_string()),
    ]
    .into_iter()
    .map(|(rel, content)| (rel.to_string(), content))
    .collect();
    for name in [
        "Header",
        "Hero",
        "About",
        "Skills",
        "Projects",
        "Experience",
        "Certifications",
    ] {
        files.push((format!("src/components/{}.jsx", name), String::new()));
    }
    for wf in ["ci", "deploy", "merge-to-feat", "promote-to-main"] {
        files.push((format!(".github/workflows/{}.yml", wf), String::new()));
    }
    files
}

pub fn portfolio_probe() -> MemoryProbe {
    portfolio_files().into_iter().collect()
}

pub fn write_portfolio(root: &Path) {
    for (rel, content) in portfolio_files() {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Runs `f` against a fresh harness writing to an uncolored buffer and
/// returns the result together with the report text.
pub fn capture<F>(f: F) -> (RunResult, String)
where
    F: FnOnce(&mut Harness<&mut Buffer>),
{
    let mut buf = Buffer::no_color();
    let result = {
        let mut harness = Harness::new(Reporter::new(&mut buf));
        f(&mut harness);
        harness.finish()
    };
    (result, String::from_utf8_lossy(buf.as_slice()).into_owned())
}
