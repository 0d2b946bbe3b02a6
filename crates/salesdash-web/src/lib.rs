//! Static report page generator for salesdash documents.

pub mod build;
pub mod figures;
pub mod pages;

pub use build::{build_site, BuildManifest};
pub use figures::{render_chart, render_hbar_svg, render_line_svg, render_vbar_svg};
pub use pages::{html_escape, render_page, render_pages, PageDescriptor};
