use info_gen::layout::GridTableLayoutEngine;
use info_gen::{LayoutConfig, LayoutError, Pt, Renderer, SvgRenderer, TableSpec};

fn monitoring_tools() -> TableSpec {
    let mut spec = TableSpec::new("Social Media Monitoring Tools");
    spec.column("Tool", 1.3)
        .column("Monthly price", 1.0)
        .column("Networks", 1.6)
        .column("Features", 2.0)
        .column("Best for", 1.0);
    spec.row(&[
        "Brandwatch",
        "from $2000",
        "Twitter, Instagram,\nFacebook, YouTube",
        "Real-time monitoring\nSentiment analysis\nAutomated reports",
        "Enterprise",
    ]);
    spec.row(&[
        "Hootsuite",
        "from $700",
        "Twitter, Instagram,\nFacebook, LinkedIn",
        "Post scheduling\nMonitoring\nTeam management",
        "SMB",
    ]);
    spec.row(&[
        "Google Alerts",
        "free",
        "the open web",
        "Keyword notifications delivered by email whenever new matches appear",
        "Individuals",
    ]);
    spec
}

fn response_tone() -> TableSpec {
    let mut spec = TableSpec::new("Reply Tone by Review Type");
    spec.column("Review type", 1.0)
        .column("Recommended tone", 1.0)
        .column("Avoid", 1.5)
        .column("Prefer", 1.5);
    spec.row(&[
        "Five stars",
        "Warm, personal",
        "A boilerplate thank-you that reads like it was pasted from a template",
        "A specific detail from the visit plus a genuine thank-you",
    ]);
    spec.row(&[
        "Constructive criticism",
        "Grateful, concrete",
        "Defensiveness",
        "Name the fix and when it ships",
    ]);
    spec.row(&[
        "Hostile",
        "Calm, factual",
        "Matching the reviewer's tone",
        "A short factual correction and an offer to continue privately",
    ]);
    spec
}

fn main() -> Result<(), LayoutError> {
    let engine = GridTableLayoutEngine::new(LayoutConfig::default());
    let renderer = SvgRenderer::default();

    let documents = [
        (monitoring_tools(), "output/monitoring-tools-comparison.svg"),
        (response_tone(), "output/response-tone-comparison.svg"),
    ];

    for (spec, path) in &documents {
        let geometry = engine.layout(spec, Pt(1008.0))?;
        renderer.save(&geometry, path)?;
        println!("✓ {path}");
    }

    Ok(())
}
