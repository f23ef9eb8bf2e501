// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

const HEADINGS: [&str; 9] = [
    "## 1. Key Partnerships 🤝",
    "## Key Activities",
    "## Our Offer ✨",
    "## Customer Relationships",
    "## Target Market 🎯",
    "## Key Resources",
    "## Distribution",
    "## Costs",
    "## Pricing 💰",
];

/// A canvas with every region filled, repeated `copies` times
#[allow(dead_code)]
pub fn generate_canvas(copies: usize, bullets: usize) -> String {
    let mut content = String::from("# Benchmark Co - Business Model Canvas\n\n");
    for copy in 0..copies {
        for heading in HEADINGS {
            content.push_str(heading);
            content.push('\n');
            for i in 0..bullets {
                content.push_str(&format!(
                    "- **Item {i}**: detail for copy {copy} with some extra words\n"
                ));
            }
            content.push('\n');
        }
    }
    content
}

/// Headings that fall through every synonym to a derived key
#[allow(dead_code)]
pub fn generate_unmatched_headings(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("### {i}. Roadmap Phase {i} 🚧"))
        .collect()
}
