//! Flow Row Example - category chips in a single row
//!
//! This example demonstrates:
//! - Building a flow container and its children from markup attributes
//! - Measuring and laying out at several widths
//! - Children that overflow being skipped while narrower ones still fit
//! - Pass-through event hooks
//!
//! Run with: RUST_LOG=flow_container=trace cargo run --example flow_row

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use flow_container::{
    AttributeSet, Block, Container, DisplayMetrics, Element, FlowContainer, Frame, MeasureSpec,
    Placement,
};

const CATEGORIES: &[&str] = &["Books", "Electronics", "Garden", "Toys", "Home & Kitchen", "Art"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== flow-container Flow Row Example ===\n");

    // One cell per dp keeps the terminal drawing readable.
    let metrics = DisplayMetrics::with_density(1.0);

    let container_attrs = AttributeSet::parse(
        r#"android:id="categories" android:paddingHorizontal="1dp" android:minHeight="1dp""#,
    )?;
    let mut row = FlowContainer::from_attributes(&container_attrs, &metrics)?;

    let chip_attrs = AttributeSet::parse(
        r#"android:layout_width="wrap_content" android:layout_height="wrap_content" android:layout_marginRight="1dp""#,
    )?;
    for name in CATEGORIES {
        let width = name.chars().count() as i32 + 2;
        row.add_child_with_attributes(Block::labeled(*name, width, 1), &chip_attrs, &metrics)?;
    }

    for width in [80, 40, 24, 12] {
        row.measure(MeasureSpec::exactly(width), MeasureSpec::unspecified());
        let height = row.measured_height().size;
        row.layout(Frame::from_size(width, height));

        println!("width {width:>2}: |{}|", render(&row, width));
        for (index, placement) in row.placements().into_iter().enumerate() {
            if placement == Some(Placement::Skipped) {
                println!("          skipped {}", CATEGORIES[index].dark_grey());
            }
        }
    }

    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 2,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    println!("\nintercepted: {}", row.on_intercept_event(&click));
    println!("handled:     {}", row.on_handle_event(&click));

    println!("\n=== Example Complete ===");
    Ok(())
}

/// Draw one text row with each placed chip at its frame.
fn render(row: &FlowContainer, width: i32) -> String {
    let mut line = String::new();
    let mut column = 0;

    for (index, placement) in row.placements().into_iter().enumerate() {
        let Some(Placement::Placed(frame)) = placement else {
            continue;
        };
        while column < frame.left {
            line.push(' ');
            column += 1;
        }
        let chip = format!("[{}]", CATEGORIES[index]);
        line.push_str(&chip.as_str().green().to_string());
        column = frame.right;
    }

    while column < width {
        line.push(' ');
        column += 1;
    }
    line
}
