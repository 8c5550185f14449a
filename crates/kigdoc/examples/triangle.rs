//! Example: building a labeled triangle with its circumcircle
//!
//! This example demonstrates the programmatic session API: catalog
//! constructions, display options, derived properties, and finalizing to
//! the document text.

use kigdoc::{Arg, Session, view::DisplayOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::default();
    session.set_grid(false);

    // Three named vertices
    let a = session.construct_kind(
        "Point",
        &[Arg::Double(0.0), Arg::Double(0.0)],
        &DisplayOptions::new().with_name("A"),
    )?;
    let b = session.construct_kind(
        "Point",
        &[Arg::Double(4.0), Arg::Double(0.0)],
        &DisplayOptions::new().with_name("B"),
    )?;
    let c = session.construct_kind(
        "Point",
        &[Arg::Double(1.0), Arg::Double(3.0)],
        &DisplayOptions::new().with_name("C"),
    )?;

    // The triangle and its circumcircle
    session.construct_kind(
        "Triangle",
        &[Arg::Node(a), Arg::Node(b), Arg::Node(c)],
        &DisplayOptions::new().with_color("#228822"),
    )?;
    let circle = session.construct_kind(
        "CircleBy3Points",
        &[Arg::Node(a), Arg::Node(b), Arg::Node(c)],
        &DisplayOptions::new(),
    )?;

    // A derived property: the circle's center, drawn as a cross
    let center = session.construct_kind("Center", &[Arg::Node(circle)], &DisplayOptions::new())?;
    session.set_point_style(center, "Cross");

    let document = session.finalize()?;
    println!("{document}");
    Ok(())
}
