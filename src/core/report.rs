//! Console summary printed after a successful run. Observational only: by
//! the time this runs the page has already been written.

use crate::domain::model::{GroupCount, TransformResult};
use crate::utils::format::{shorten, PREVIEW_WIDTH};

pub fn print_summary(result: &TransformResult, output_path: &str) {
    println!("\n✅ JSON-LD updated successfully!\n");
    println!("📁 Updated page: {}", output_path);
    println!("📦 Total nodes: {}", result.node_count);
    if result.skipped > 0 {
        println!("⚠️  Skipped {} invalid record(s).", result.skipped);
    }

    if !result.group_counts.is_empty() {
        println!("\n📊 Summary by state:");
        print!("{}", render_group_table(&result.group_counts));
    }

    if let Some(preview) = &result.preview {
        println!("\n🧾 Sample entry:\n{}", shorten(preview, PREVIEW_WIDTH));
    }
}

fn render_group_table(groups: &[GroupCount]) -> String {
    let rule = "-".repeat(45);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for group in groups {
        out.push_str(&format!("{:<25} {:>3} nodes\n", group.name, group.count));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
