use info_gen::layout::FlowLayoutEngine;
use info_gen::{ContentTree, LayoutConfig, LayoutError, Pt, Renderer, Section, SvgRenderer};

fn crisis_response() -> ContentTree {
    let mut tree = ContentTree::new("Crisis Response Checklist");
    tree.subtitle("What to verify in the first 24 hours");

    let mut detect = Section::new("0-1 hours: detection & evidence");
    detect
        .item("Checked how far the post has spread?")
        .item("Searched for reposts on aggregator sites?")
        .item("Saved screenshots of the post and replies?")
        .item("Notified management, PR, and legal counsel?");
    tree.section(detect);

    let mut takedown = Section::new("1-3 hours: takedown decision");
    takedown
        .item("Confirmed whether the post contains factual errors or discriminatory wording?")
        .item("Confirmed it has not yet been reposted elsewhere?")
        .item("Saved a screenshot before deleting anything?")
        .item("Prepared to acknowledge the deletion in the apology?");
    tree.section(takedown);

    let mut apology = Section::new("3-6 hours: public apology");
    apology
        .item("Apology drafted, leading with the apology itself?")
        .item("Concrete explanation of what went wrong?")
        .item("Prevention measures included?")
        .item("Checked for excuses or blame-shifting?");
    tree.section(apology);

    let mut monitor = Section::new("6-24 hours: continued monitoring");
    monitor
        .item("Still searching for new mentions?")
        .item("Replied to constructive responses?")
        .item("Reported abusive replies to the platform?")
        .item("Decided whether outside counsel is needed?");
    tree.section(monitor);

    tree.note("Important: print this checklist and keep it within reach so it can be used the moment an incident starts.");
    tree
}

fn review_reply() -> ContentTree {
    let mut tree = ContentTree::new("Review Reply Checklist");
    tree.subtitle("Always confirm before posting a reply");

    let mut basics = Section::new("Basics");
    basics
        .item("No typos or grammatical mistakes?")
        .item("Customer name spelled correctly, if used?")
        .item("Tone appropriately polite?");
    tree.section(basics);

    let mut content = Section::new("Content");
    content
        .item("No emotional language?")
        .item("No excuses or blame-shifting?")
        .item("Concrete improvement offered?");
    tree.section(content);

    let mut sign_off = Section::new("Final sign-off");
    sign_off
        .item("Reviewed by at least two people?")
        .item("Approved by the responsible manager?");
    tree.section(sign_off);

    tree.note("Run every reply through this list; post only when every box is ticked.");
    tree
}

fn main() -> Result<(), LayoutError> {
    let engine = FlowLayoutEngine::new(LayoutConfig::default());
    let renderer = SvgRenderer::default();

    let documents = [
        (crisis_response(), "output/crisis-response-checklist.svg"),
        (review_reply(), "output/review-reply-checklist.svg"),
    ];

    for (tree, path) in &documents {
        let geometry = engine.layout(tree, Pt(1008.0))?;
        renderer.save(&geometry, path)?;
        println!("✓ {path}");
    }

    Ok(())
}
