use crate::geom::point;
use crate::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn single_letter_yields_origin_and_one_step() {
    let chain = generate("a", 800, 600).unwrap();
    assert_eq!(chain.len(), 2);

    let origin = &chain.nodes()[0];
    let first = &chain.nodes()[1];
    assert_eq!(origin.source, None);
    assert_eq!(origin.value, 0);
    assert_eq!(origin.angle, 0.0);
    assert_eq!(first.source, Some('a'));
    assert_eq!(first.value, 0);
    assert_close(first.angle, 0.5);

    // value 0 => step 50 - 30 = 20 along a heading of 0.5 rad
    let delta = first.position - origin.position;
    assert_close(delta.x, 0.5f64.cos() * 20.0);
    assert_close(delta.y, 0.5f64.sin() * 20.0);

    // two points recentre about their own midpoint
    let mid = origin.position.lerp(first.position, 0.5);
    assert_close(mid.x, 400.0);
    assert_close(mid.y, 300.0);
}

#[test]
fn chain_length_is_sequence_length_plus_origin() {
    for text in ["a", "ab", "abcabc", "aiwertunoaapmoa", "zyxwvutsrqponmlkjihgfedcba"] {
        let chain = generate(text, 640, 480).unwrap();
        assert_eq!(chain.len(), text.len() + 1, "{text}");
        let sources: String = chain.iter().filter_map(|n| n.source).collect();
        assert_eq!(sources, text);
    }
}

#[test]
fn generation_is_deterministic() {
    let a = generate("aiwertunoaapmoa", 1024, 768).unwrap();
    let b = generate("aiwertunoaapmoa", 1024, 768).unwrap();
    assert_eq!(a, b);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.position.x.to_bits(), y.position.x.to_bits());
        assert_eq!(x.position.y.to_bits(), y.position.y.to_bits());
        assert_eq!(x.angle.to_bits(), y.angle.to_bits());
    }
}

#[test]
fn bounds_are_centred_on_the_surface() {
    for (text, w, h) in [
        ("aiwertunoaapmoa", 800, 600),
        ("zzzzzzzz", 801, 601),
        ("mnmnmnmn", 300, 900),
        ("q", 1, 1),
    ] {
        let chain = generate(text, w, h).unwrap();
        let c = chain.bounds().center();
        assert!((c.x - f64::from(w) / 2.0).abs() < 1e-9, "{text}: {c:?}");
        assert!((c.y - f64::from(h) / 2.0).abs() < 1e-9, "{text}: {c:?}");
        assert_eq!(chain.surface_center(), point(f64::from(w) / 2.0, f64::from(h) / 2.0));
    }
}

#[test]
fn surface_size_only_translates_the_shape() {
    let small = generate("helloworld", 200, 100).unwrap();
    let large = generate("helloworld", 1000, 700).unwrap();
    for (a, b) in small.iter().zip(large.iter()) {
        let d = b.position - a.position;
        assert!((d.x - 400.0).abs() < 1e-9);
        assert!((d.y - 300.0).abs() < 1e-9);
        assert_eq!(a.angle, b.angle);
    }
}

#[test]
fn uppercase_input_is_lowercased_before_generation() {
    assert_eq!(
        generate("HeLLo", 800, 600).unwrap(),
        generate("hello", 800, 600).unwrap()
    );
}

#[test]
fn invalid_input_is_rejected_without_a_chain() {
    assert_eq!(generate("", 800, 600), Err(ValidationError::Empty));
    assert_eq!(
        generate("abc1", 800, 600),
        Err(ValidationError::InvalidCharacter { ch: '1', index: 3 })
    );
}

#[test]
fn build_chain_matches_generate() {
    let sequence = Sequence::parse("abcabc").unwrap();
    assert_eq!(
        build_chain(&sequence, 800, 600),
        generate("abcabc", 800, 600).unwrap()
    );
}

#[test]
fn chain_serializes_origin_without_source() {
    let chain = generate("ab", 100, 100).unwrap();
    let json = serde_json::to_value(&chain).unwrap();
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(nodes[0]["source"].is_null());
    assert_eq!(nodes[1]["source"], "a");
    assert_eq!(nodes[2]["value"], 1);
    assert_eq!(json["surface"], serde_json::json!([100.0, 100.0]));
}
