//! System instructions, prompt assembly, and the quotation schema.

use crate::types::CatalogSnapshot;

/// Rate-card policy instruction attached to every chat completion.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are an expert creative agency assistant named "OEVG Creatives AI".
You help agency owners manage their photography and videography business based in Guwahati.
Your tone is professional, encouraging, and precise.

Specific OEVG Policies to follow:
1. Pricing is always in Indian Rupees (₹).
2. "Traditional Photography" starts at ₹5,200 (Crop Sensor).
3. "Classic Photography" starts at ₹6,850 (Full Sensor).
4. Video Editing (Traditional) starts strictly at ₹3,000 for up to 30 minutes.
5. Photo Editing (Common) is ₹1,000 for 100 photos.
6. Raw photos are always unlimited and file transfer is free online.
7. Print Add-ons: Printed hard-copy photo album (Up to 150 photos) is ₹4,000.
8. External device file transfers are paid.

When asked about equipment, prioritize OEVG's fleet: Sony SII, Sony 6000, Canon M50, Ronin RC, Godox LC500.
"#;

/// Instruction for the structured quotation-drafting mode.
pub const QUOTE_SYSTEM_INSTRUCTION: &str = "You are the OEVG Optimization Engine. \
    Build quotes based on the OEVG rate card. \
    Output strictly in JSON format matching the schema.";

/// Assemble the quote-drafting prompt: user constraints plus the live
/// catalog serialized inline so the model quotes exact prices.
pub fn build_quote_prompt(
    constraints: &str,
    catalog: &CatalogSnapshot,
) -> Result<String, serde_json::Error> {
    let services = serde_json::to_string(&catalog.services)?;
    let contractors = serde_json::to_string(&catalog.contractors)?;
    let assets = serde_json::to_string(&catalog.assets)?;
    Ok(format!(
        r#"User Constraints: "{constraints}"

Current OEVG Catalog Data:
Services: {services}
Contractors: {contractors}
Assets: {assets}

Task:
Build a quotation for OEVG Creatives. Use EXACT prices from the catalog.
- Traditional packages use Crop sensors (Sony 6000, Canon M50).
- Classic/Premium packages use Full sensors (Sony SII).
- Always include Photo Editing (₹1,000) if photography is selected.
- Baseline video editing is ₹3,000."#
    ))
}

/// JSON schema the quote completion must satisfy.
pub fn quotation_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "projectType": {
                "type": "STRING",
                "description": "Photography, Videography, or Hybrid"
            },
            "tier": { "type": "STRING", "description": "Standard or Premium" },
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "description": { "type": "STRING" },
                        "price": { "type": "NUMBER" },
                        "quantity": { "type": "NUMBER" },
                        "type": {
                            "type": "STRING",
                            "description": "catalog, resource, or manual"
                        }
                    },
                    "required": ["description", "price", "quantity", "type"]
                }
            },
            "explanation": {
                "type": "STRING",
                "description": "Briefly explain why this combination was selected."
            }
        },
        "required": ["projectType", "tier", "items", "explanation"]
    })
}
