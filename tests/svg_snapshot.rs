//! SVG output of small phasor diagrams, read back through the SVG DOM.

use facet_svg::{Svg, SvgNode, Text, facet_xml};
use num_complex::Complex64;
use phasorplot::style::LineStyle;
use phasorplot::units::{AMPERE, VOLT};
use phasorplot::{PhasorOptions, Recorder, SvgOptions, draw_phasor};

fn render(c: Complex64, opts: &PhasorOptions) -> String {
    let mut fig = Recorder::new();
    draw_phasor(&mut fig, c, opts).unwrap();
    fig.to_svg(&SvgOptions::default()).unwrap()
}

fn parse(svg: &str) -> Svg {
    facet_xml::from_str(svg).unwrap_or_else(|e| panic!("XML parse error: {e}\n{svg}"))
}

fn texts(doc: &Svg) -> Vec<&Text> {
    doc.children
        .iter()
        .filter_map(|node| match node {
            SvgNode::Text(t) => Some(t),
            _ => None,
        })
        .collect()
}

/// One line per element, independent of attribute order and quoting.
fn outline(svg: &str) -> String {
    let doc = parse(svg);
    let mut lines = vec![format!("viewBox {}", doc.view_box.unwrap_or_default())];
    for node in &doc.children {
        let line = match node {
            SvgNode::Path(_) => "path".to_string(),
            SvgNode::Polygon(_) => "polygon".to_string(),
            SvgNode::Text(t) => format!(
                "text ({:.3}, {:.3}) {} {} size={} rotate={} {:?}",
                t.x.unwrap_or(f64::NAN),
                t.y.unwrap_or(f64::NAN),
                t.text_anchor.as_deref().unwrap_or("-"),
                t.dominant_baseline.as_deref().unwrap_or("-"),
                t.font_size.as_deref().unwrap_or("-"),
                t.transform.as_deref().unwrap_or("-"),
                t.content,
            ),
            _ => "other".to_string(),
        };
        lines.push(line);
    }
    lines.join("\n")
}

#[test]
fn horizontal_unit_phasor() {
    let svg = render(
        Complex64::new(1.0, 0.0),
        &PhasorOptions::default().with_label("V"),
    );
    insta::assert_snapshot!(outline(&svg), @r#"
    viewBox 0 0 168 38.4
    path
    polygon
    text (84.000, 26.400) middle central size=12 rotate=- "V"
    "#);
}

#[test]
fn vertical_phasor_with_rotated_label() {
    let svg = render(
        Complex64::new(0.0, 1.0),
        &PhasorOptions::default().with_label("I").with_relrot(true),
    );
    insta::assert_snapshot!(outline(&svg), @r#"
    viewBox 0 0 38.4 168
    path
    polygon
    text (26.400, 84.000) middle central size=12 rotate=rotate(-90 26.4,84) "I"
    "#);
}

#[test]
fn unlabeled_phasor_has_no_text_element() {
    let doc = parse(&render(Complex64::new(1.0, 0.0), &PhasorOptions::default()));
    assert!(texts(&doc).is_empty());
    assert_eq!(doc.children.len(), 2);
}

#[test]
fn ampersand_in_label_is_escaped() {
    let svg = render(
        Complex64::new(1.0, 0.0),
        &PhasorOptions::default().with_label("R&D;"),
    );
    assert!(svg.contains("R&amp;D;"));
    assert!(!svg.contains(">R&D;<"));

    let doc = parse(&svg);
    assert_eq!(texts(&doc)[0].content, "R&D;");
}

#[test]
fn unicode_label_round_trips() {
    let mut fig = Recorder::new();
    draw_phasor(
        &mut fig,
        Complex64::new(1.0, 0.0),
        &PhasorOptions::default().with_label("φ"),
    )
    .unwrap();
    let options = SvgOptions {
        font_size: 9.5,
        font_family: Some("DejaVu Sans".to_string()),
        ..SvgOptions::default()
    };
    let svg = fig.to_svg(&options).unwrap();
    assert!(svg.contains(r#"font-family="DejaVu Sans""#));

    let doc = parse(&svg);
    let text = texts(&doc)[0];
    assert_eq!(text.content, "φ");
    assert_eq!(text.font_size.as_deref(), Some("9.5"));
}

#[test]
fn diagram_with_several_phasors() {
    let v = Complex64::new(230.0, 0.0) * VOLT;
    let i = Complex64::new(8.0, -6.0) * AMPERE;
    let mut fig = Recorder::new();
    draw_phasor(&mut fig, v.clone(), &PhasorOptions::default().with_label("V"))
        .unwrap();
    draw_phasor(
        &mut fig,
        i,
        &PhasorOptions::default()
            .with_label("I")
            .with_reference(10.0 * AMPERE)
            .with_color("red")
            .with_linestyle(LineStyle::Dashed),
    )
    .unwrap();
    draw_phasor(
        &mut fig,
        Complex64::new(0.0, 50.0) * VOLT,
        &PhasorOptions::default()
            .with_origin(v)
            .with_reference(230.0 * VOLT)
            .with_label("jX·I"),
    )
    .unwrap();

    let svg = fig.to_svg(&SvgOptions::default()).unwrap();
    assert_eq!(fig.len(), 9);
    assert!(svg.contains("stroke-dasharray:3.7,1.6"));

    let doc = parse(&svg);
    let paths = doc
        .children
        .iter()
        .filter(|node| matches!(node, SvgNode::Path(_)))
        .count();
    assert_eq!(paths, 3);
    let labels: Vec<&str> = texts(&doc).iter().map(|t| t.content.as_str()).collect();
    assert_eq!(labels, ["V", "I", "jX·I"]);
}
