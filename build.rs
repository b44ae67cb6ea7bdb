//! Bundles assets/css/main.css and its @imports into assets/dist/bundle.css

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/bundle.css";

fn bundle_css() -> Result<String, String> {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("Failed to bundle {}: {}", ENTRY, e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("Failed to minify CSS: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("Failed to print CSS: {}", e))?;

    Ok(css.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let css = bundle_css().unwrap_or_else(|e| panic!("{}", e));
    fs::write(OUTPUT, css).expect("Failed to write bundle.css");
}
