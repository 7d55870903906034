//! Round-trip and decode-failure tests for the template codec.

use chrono::Utc;
use proposal_codec::{
    decode_template, decode_template_str, deserialize, encode_template, serialize, to_preview_request,
    CompanyData, DecodeError, TemplateMeta,
};
use proposal_document::{
    library, BlockContent, BlockType, EditorState, HeadingContent, LineItem, PricingTableContent,
};
use serde_json::json;

fn meta() -> TemplateMeta {
    TemplateMeta {
        id: "tpl-1".to_string(),
        name: "Rooftop 8kWp offer".to_string(),
        description: Some("Standard residential package".to_string()),
        user_id: "user-1".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_state() -> EditorState {
    let now = Utc::now();
    let mut state = EditorState::new();

    let mut heading = library::get(BlockType::Heading).instantiate("b-1".to_string(), now);
    heading.content = BlockContent::Heading(HeadingContent {
        text: "Your solar installation".to_string(),
        level: 1,
    });
    state.blocks.push(heading);

    let mut pricing = library::get(BlockType::PricingTable).instantiate("b-2".to_string(), now);
    pricing.content = BlockContent::PricingTable(PricingTableContent {
        items: vec![
            LineItem::new("Solar panel 420W", 12.0, 189.0),
            LineItem::new("Hybrid inverter", 1.0, 1450.0),
            LineItem::new("Installation", 1.0, 2200.0),
        ],
        tax_rate: 0.19,
        currency: "EUR".to_string(),
    });
    state.blocks.push(pricing);

    state
        .blocks
        .push(library::get(BlockType::Footer).instantiate("b-3".to_string(), now));

    state.global_styles.primary_color = "#b45309".to_string();
    state.canvas_size.height = 420.0;
    state
}

#[test]
fn test_full_round_trip_through_json() -> anyhow::Result<()> {
    let state = sample_state();
    let record = serialize(&state, &meta());

    // state -> record -> JSON -> record -> state
    let encoded = encode_template(&record)?;
    let decoded = decode_template(encoded)?;
    assert_eq!(decoded, record);

    let restored = deserialize(&decoded);
    assert_eq!(restored.blocks, state.blocks);
    assert_eq!(restored.global_styles, state.global_styles);
    assert_eq!(restored.canvas_size, state.canvas_size);
    assert_eq!(restored.selected_block_id, None);
    assert!(!restored.is_preview_mode);
    assert!(!restored.is_dirty);
    Ok(())
}

#[test]
fn test_block_order_survives_round_trip() {
    let state = sample_state();
    let record = serialize(&state, &meta());
    let decoded = decode_template(encode_template(&record).unwrap()).unwrap();

    let order: Vec<&str> = decoded.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(order, ["b-1", "b-2", "b-3"]);
}

#[test]
fn test_decode_reports_block_context() {
    let mut value = encode_template(&serialize(&sample_state(), &meta())).unwrap();
    value["blocks"][1]["content"] = json!({ "items": [] });

    let err = decode_template(value).unwrap_err();
    match err {
        DecodeError::InvalidBlock {
            index, block_type, ..
        } => {
            assert_eq!(index, 1);
            assert_eq!(block_type, "pricing-table");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_decode_rejects_invalid_json_text() {
    let err = decode_template_str("{ not json").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidJson(_)));
}

#[test]
fn test_preview_request_shape() {
    let state = sample_state();
    let company = CompanyData {
        name: "Helios Energietechnik".to_string(),
        tagline: "Sonne rechnet sich".to_string(),
        description: String::new(),
        address: "Industriestr. 12, Potsdam".to_string(),
        phone: "+49 331 99887".to_string(),
        email: "info@helios.example".to_string(),
        website: "https://helios.example".to_string(),
        logo_url: "https://helios.example/logo.svg".to_string(),
    };

    let request = to_preview_request(&state, "tpl-1", None, Some(company));
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["templateId"], "tpl-1");
    assert_eq!(value["blocks"].as_array().unwrap().len(), 3);
    assert_eq!(value["companyData"]["name"], "Helios Energietechnik");
    assert!(value.get("customerData").is_none());
    // The canvas rides along for layout.
    assert_eq!(value["canvasSize"]["unit"], "mm");
}

#[test]
fn test_pricing_totals_recomputable_after_decode() {
    let record = serialize(&sample_state(), &meta());
    let decoded = decode_template(encode_template(&record).unwrap()).unwrap();

    let BlockContent::PricingTable(pricing) = &decoded.blocks[1].content else {
        panic!("expected pricing table");
    };
    let subtotal = 12.0 * 189.0 + 1450.0 + 2200.0;
    assert!((pricing.subtotal() - subtotal).abs() < 1e-9);
    assert!((pricing.total() - subtotal * 1.19).abs() < 1e-9);
}
