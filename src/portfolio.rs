//! Smoke checks for the portfolio website repository.
//!
//! Each check only asks whether a file exists, whether it contains a marker
//! string, or whether a manifest field is present. Nothing here understands
//! the files it inspects.

use crate::assert::ensure;
use crate::check;
use crate::manifest::{Manifest, MANIFEST_PATH};
use crate::probe::{require_all, require_contains, require_file, Probe};
use crate::suite::Suite;

pub const SUITE_TITLE: &str = "Running Portfolio Website Tests...";
pub const PACKAGE_NAME: &str = "portfolio-website";
pub const AUTHOR_NAME: &str = "Muhammad Hammad ur Rehman";

pub const ESSENTIAL_FILES: &[&str] = &[
    "index.html",
    "vite.config.js",
    "tailwind.config.js",
    "postcss.config.js",
    "src/App.jsx",
    "src/main.jsx",
    "src/index.css",
];

pub const COMPONENTS: &[&str] = &[
    "src/components/Header.jsx",
    "src/components/Hero.jsx",
    "src/components/About.jsx",
    "src/components/Skills.jsx",
    "src/components/Projects.jsx",
    "src/components/Experience.jsx",
    "src/components/Certifications.jsx",
];

pub const CONTEXT_AND_HOOKS: &[&str] = &["src/context/ThemeContext.jsx", "src/hooks/useCustomHooks.js"];

pub const DOCS: &[&str] = &["README.md"];

pub const WORKFLOWS: &[&str] = &[
    ".github/workflows/ci.yml",
    ".github/workflows/deploy.yml",
    ".github/workflows/merge-to-feat.yml",
    ".github/workflows/promote-to-main.yml",
];

// (package, message) pairs, checked in order.
const DEPENDENCIES: &[(&str, &str)] = &[
    ("react", "React dependency not found"),
    ("react-dom", "React DOM dependency not found"),
    ("framer-motion", "Framer Motion dependency not found"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("vite", "Vite dev dependency not found"),
    ("tailwindcss", "Tailwind CSS dev dependency not found"),
];

/// Builds the full portfolio suite over `probe`. Nothing runs until
/// [`Suite::run`] is called.
pub fn portfolio_suite(probe: &dyn Probe) -> Suite<'_> {
    let mut suite = Suite::new(SUITE_TITLE);

    suite.add("package.json exists and is valid", move || {
        require_file(probe, MANIFEST_PATH)?;
        let manifest = Manifest::load(probe)?;
        check!(manifest.name_is(PACKAGE_NAME), "Invalid package name");
        check!(manifest.has_script("build"), "Build script not found");
        check!(manifest.has_script("dev"), "Dev script not found");
        Ok(())
    });

    suite.add("Essential files exist", move || require_all(probe, ESSENTIAL_FILES));

    suite.add("Required components exist", move || require_all(probe, COMPONENTS));

    suite.add("Context and custom hooks exist", move || {
        require_all(probe, CONTEXT_AND_HOOKS)
    });

    suite.add("Dependencies are properly defined", move || {
        let manifest = Manifest::load(probe)?;
        for (dep, message) in DEPENDENCIES {
            ensure(manifest.has_dependency(dep), *message)?;
        }
        for (dep, message) in DEV_DEPENDENCIES {
            ensure(manifest.has_dev_dependency(dep), *message)?;
        }
        Ok(())
    });

    suite.add("Documentation exists", move || require_all(probe, DOCS));

    suite.add("Tailwind config is valid", move || {
        let content = probe.read_to_string("tailwind.config.js")?;
        require_contains(&content, "darkMode", "Dark mode not configured in Tailwind")?;
        require_contains(&content, "class", "Dark mode class strategy not set")
    });

    suite.add("Vite config exists and includes React plugin", move || {
        let content = probe.read_to_string("vite.config.js")?;
        require_contains(&content, "react", "React plugin not configured in Vite")
    });

    suite.add("index.html has proper meta tags", move || {
        let content = probe.read_to_string("index.html")?;
        require_contains(&content, "viewport", "Viewport meta tag not found")?;
        require_contains(&content, "description", "Description meta tag not found")?;
        require_contains(&content, AUTHOR_NAME, "Author name not found in HTML")
    });

    suite.add("App.jsx has proper structure", move || {
        let content = probe.read_to_string("src/App.jsx")?;
        require_contains(&content, "ThemeProvider", "ThemeProvider not found in App")?;
        require_contains(&content, "Hero", "Hero component not imported")?;
        require_contains(&content, "About", "About component not imported")?;
        require_contains(&content, "ErrorBoundary", "ErrorBoundary not found")
    });

    suite.add("GitHub Actions workflows exist", move || require_all(probe, WORKFLOWS));

    suite
}
