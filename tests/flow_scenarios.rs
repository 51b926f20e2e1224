//! End-to-end measure/layout scenarios for FlowContainer.

use flow_container::{
    Block, Element, FlowContainer, FlowParams, FlowProps, Frame, Insets, MeasureSpec, Placement,
    SizeRequest, insets,
};
use taffy::{
    AlignItems, AvailableSpace, Dimension, FlexDirection, LengthPercentage, LengthPercentageAuto,
    Rect, Size, Style, TaffyTree,
};

// =============================================================================
// Helpers
// =============================================================================

struct ChildSpec {
    width: i32,
    height: i32,
    margins: Insets,
}

fn child(width: i32, height: i32, margins: Insets) -> ChildSpec {
    ChildSpec {
        width,
        height,
        margins,
    }
}

fn build(padding: Insets, children: &[ChildSpec]) -> FlowContainer {
    let mut row = FlowContainer::new(FlowProps {
        padding,
        ..Default::default()
    });
    for spec in children {
        row.add_child(
            Block::new(spec.width, spec.height),
            Some(FlowParams::wrap().with_margins(spec.margins).into()),
        );
    }
    row
}

fn run(row: &mut FlowContainer, width: i32) {
    row.measure(MeasureSpec::exactly(width), MeasureSpec::unspecified());
    let height = row.measured_height().size;
    row.layout(Frame::from_size(width, height));
}

/// Lay the same row out with taffy as a non-wrapping, non-shrinking flex row.
fn taffy_frames(padding: Insets, children: &[ChildSpec], width: i32) -> Vec<Frame> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let leaves: Vec<_> = children
        .iter()
        .map(|spec| {
            tree.new_leaf(Style {
                size: Size {
                    width: Dimension::Length(spec.width as f32),
                    height: Dimension::Length(spec.height as f32),
                },
                margin: Rect {
                    left: LengthPercentageAuto::Length(spec.margins.left as f32),
                    right: LengthPercentageAuto::Length(spec.margins.right as f32),
                    top: LengthPercentageAuto::Length(spec.margins.top as f32),
                    bottom: LengthPercentageAuto::Length(spec.margins.bottom as f32),
                },
                flex_shrink: 0.0,
                ..Default::default()
            })
            .unwrap()
        })
        .collect();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                align_items: Some(AlignItems::FlexStart),
                size: Size {
                    width: Dimension::Length(width as f32),
                    height: Dimension::Auto,
                },
                padding: Rect {
                    left: LengthPercentage::Length(padding.left as f32),
                    right: LengthPercentage::Length(padding.right as f32),
                    top: LengthPercentage::Length(padding.top as f32),
                    bottom: LengthPercentage::Length(padding.bottom as f32),
                },
                ..Default::default()
            },
            &leaves,
        )
        .unwrap();

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::MaxContent,
        },
    )
    .unwrap();

    leaves
        .iter()
        .map(|&leaf| {
            let layout = tree.layout(leaf).unwrap();
            let left = layout.location.x.round() as i32;
            let top = layout.location.y.round() as i32;
            Frame::new(
                left,
                top,
                left + layout.size.width.round() as i32,
                top + layout.size.height.round() as i32,
            )
        })
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_hundred_wide_row_drops_third_child() {
    let children = [
        child(40, 12, insets(0, 0, 0, 0)),
        child(40, 12, insets(0, 0, 0, 0)),
        child(40, 12, insets(0, 0, 0, 0)),
    ];
    let mut row = build(insets(0, 0, 0, 0), &children);
    run(&mut row, 100);

    assert_eq!(
        row.placements(),
        vec![
            Some(Placement::Placed(Frame::new(0, 0, 40, 12))),
            Some(Placement::Placed(Frame::new(40, 0, 80, 12))),
            Some(Placement::Skipped),
        ]
    );
}

#[test]
fn test_measure_counts_children_layout_skips() {
    let children = [
        child(40, 12, insets(0, 0, 0, 0)),
        child(40, 12, insets(0, 0, 0, 0)),
        child(40, 12, insets(0, 0, 0, 0)),
    ];
    let mut row = build(insets(0, 0, 0, 0), &children);

    row.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
    assert_eq!(row.measured_width().size, 120);

    // The parent only gives it 100; the third child is measured but skipped.
    row.layout(Frame::from_size(100, 12));
    assert_eq!(row.placement(2), Some(Placement::Skipped));
}

#[test]
fn test_empty_row_with_padding() {
    let mut row = build(insets(2, 3, 2, 3), &[]);
    row.measure(MeasureSpec::at_most(500), MeasureSpec::at_most(500));
    assert_eq!(row.measured_width().size, 4);
    assert_eq!(row.measured_height().size, 6);

    row.layout(Frame::from_size(4, 6));
    assert!(row.placements().is_empty());
}

#[test]
fn test_height_is_tallest_child_plus_padding() {
    let children = [
        child(10, 8, insets(0, 1, 0, 1)),
        child(10, 20, insets(0, 4, 0, 0)),
        child(10, 5, insets(0, 0, 0, 30)),
    ];
    let mut row = build(insets(1, 2, 1, 3), &children);
    row.measure(MeasureSpec::at_most(200), MeasureSpec::at_most(200));

    // max(10, 24, 35) + 2 + 3
    assert_eq!(row.measured_height().size, 40);
    assert!(!row.measured_height().too_small());

    row.measure(MeasureSpec::at_most(200), MeasureSpec::at_most(30));
    assert_eq!(row.measured_height().size, 30);
    assert!(row.measured_height().too_small());
}

#[test]
fn test_nested_rows() {
    let mut inner = FlowContainer::new(FlowProps {
        id: Some("inner".to_string()),
        padding: insets(1, 1, 1, 1),
        ..Default::default()
    });
    inner.add_child(Block::new(10, 4), None);
    inner.add_child(Block::new(10, 4), None);

    let mut outer = FlowContainer::new(FlowProps {
        id: Some("outer".to_string()),
        padding: insets(2, 2, 2, 2),
        ..Default::default()
    });
    outer.add_child(Block::new(5, 5), None);
    outer.add_child(inner, Some(FlowParams::wrap().with_margins(insets(3, 0, 0, 0)).into()));

    outer.measure(MeasureSpec::at_most(80), MeasureSpec::unspecified());
    // 2 + 5 + 3 + (1 + 20 + 1) + 2
    assert_eq!(outer.measured_width().size, 34);
    // 2 + max(5, 6) + 2
    assert_eq!(outer.measured_height().size, 10);

    outer.layout(Frame::from_size(34, 10));
    assert_eq!(outer.placement(1), Some(Placement::Placed(Frame::new(10, 2, 32, 8))));
    assert_eq!(outer.child(1).and_then(|c| c.name()), Some("inner"));
    assert_eq!(outer.child(1).and_then(|c| c.frame()), Some(Frame::new(10, 2, 32, 8)));
}

#[test]
fn test_nested_row_takes_exact_width() {
    let mut inner = FlowContainer::new(FlowProps::default());
    inner.add_child(Block::labeled("leaf", 10, 4), None);

    let mut outer = FlowContainer::new(FlowProps::default());
    outer.add_child(inner, Some(FlowParams::new(SizeRequest::Exact(30), SizeRequest::WrapContent).into()));

    run(&mut outer, 50);

    let inner_frame = outer.child(0).and_then(|c| c.frame());
    assert_eq!(inner_frame, Some(Frame::new(0, 0, 30, 4)));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_matches_taffy_when_everything_fits() {
    let cases: Vec<(Insets, Vec<ChildSpec>)> = vec![
        (insets(0, 0, 0, 0), vec![child(10, 5, insets(0, 0, 0, 0)), child(20, 7, insets(0, 0, 0, 0))]),
        (
            insets(4, 2, 6, 1),
            vec![
                child(12, 9, insets(1, 2, 3, 0)),
                child(8, 3, insets(0, 0, 5, 4)),
                child(15, 11, insets(2, 1, 0, 0)),
            ],
        ),
        (insets(3, 3, 3, 3), vec![child(0, 0, insets(2, 2, 2, 2)), child(30, 1, insets(0, 0, 0, 0))]),
    ];

    for (padding, children) in cases {
        let needed: i32 = children.iter().map(|c| c.width + c.margins.left + c.margins.right).sum::<i32>()
            + padding.left
            + padding.right;
        let width = needed + 7;

        let mut row = build(padding, &children);
        run(&mut row, width);

        let ours: Vec<_> = row
            .placements()
            .into_iter()
            .map(|p| match p {
                Some(Placement::Placed(frame)) => frame,
                other => panic!("expected every child placed, got {other:?}"),
            })
            .collect();

        assert_eq!(ours, taffy_frames(padding, &children, width));
    }
}

#[test]
fn test_placed_children_never_cross_right_bound() {
    let children = [
        child(25, 6, insets(1, 0, 2, 0)),
        child(60, 6, insets(0, 0, 0, 0)),
        child(5, 6, insets(3, 0, 3, 0)),
        child(33, 6, insets(0, 0, 1, 0)),
        child(12, 6, insets(0, 0, 0, 0)),
    ];
    let padding = insets(4, 0, 3, 0);

    for width in 0..=160 {
        let mut row = build(padding, &children);
        run(&mut row, width);

        let right_bound = width - padding.right;
        let mut cursor = padding.left;

        for (index, spec) in children.iter().enumerate() {
            // Narrow rows clip children during measure; layout works from that.
            let measured = row.child(index).map(|c| c.measured_width().size).unwrap_or(0);
            assert!(measured <= spec.width);

            let left = cursor + spec.margins.left;
            let right = left + measured;

            match row.placement(index) {
                Some(Placement::Placed(frame)) => {
                    assert!(right <= right_bound, "width {width}: child {index} placed past bound");
                    assert_eq!(frame, Frame::new(left, 0, right, 6));
                    cursor = right + spec.margins.right;
                }
                Some(Placement::Skipped) => {
                    assert!(right > right_bound, "width {width}: child {index} skipped but fits");
                }
                None => panic!("width {width}: child {index} missing placement"),
            }
        }
    }
}

#[test]
fn test_remeasure_after_child_removal() {
    let children = [
        child(50, 6, insets(0, 0, 0, 0)),
        child(60, 6, insets(0, 0, 0, 0)),
        child(30, 6, insets(0, 0, 0, 0)),
    ];
    let mut row = build(insets(0, 0, 0, 0), &children);
    run(&mut row, 100);
    assert_eq!(row.placement(1), Some(Placement::Skipped));

    assert!(row.remove_child(0).is_some());
    run(&mut row, 100);
    assert_eq!(
        row.placements(),
        vec![
            Some(Placement::Placed(Frame::new(0, 0, 60, 6))),
            Some(Placement::Placed(Frame::new(60, 0, 90, 6))),
        ]
    );
}
