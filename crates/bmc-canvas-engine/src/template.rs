use std::path::{Path, PathBuf};

/// File name offered for the downloadable starter document
pub const TEMPLATE_FILENAME: &str = "BMC-Template.md";

/// Starter document with one numbered heading per canvas region
pub const TEMPLATE: &str = "# Your Company Name - Business Model Canvas

## 1. Customer Segments
- Target market segment 1 (e.g., Small businesses with 10-50 employees)
- Target market segment 2 (e.g., Enterprise clients in healthcare)
- Specific demographics and psychographics

## 2. Value Propositions
- Core value proposition (e.g., Reduce operational costs by 40%)
- Unique selling points and benefits
- Problem-solution fit description

## 3. Channels
- Sales channels (e.g., Direct sales, Online platform)
- Marketing channels (e.g., Social media, Content marketing)
- Distribution methods

## 4. Customer Relationships
- Relationship type (e.g., Personal assistance, Self-service)
- Customer acquisition strategy
- Retention and loyalty programs

## 5. Revenue Streams
- Primary revenue model (e.g., Subscription-based SaaS)
- Secondary revenue sources (e.g., Professional services)
- Pricing strategy

## 6. Key Activities
- Core business activities (e.g., Software development)
- Critical operational processes
- Value chain activities

## 7. Key Resources
- Essential assets (e.g., Proprietary technology, Brand)
- Human resources and expertise
- Financial and physical resources

## 8. Key Partnerships
- Strategic partners (e.g., Technology vendors)
- Supplier relationships
- Channel partners and alliances

## 9. Cost Structure
- Major cost categories (e.g., Personnel, Infrastructure)
- Fixed vs variable costs
- Cost optimization strategies";

/// Write the template into `dir`, returning the path written
pub fn write_template(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(TEMPLATE_FILENAME);
    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, TEMPLATE)?;
    log::info!("wrote template to {}", path.display());
    Ok(path)
}
