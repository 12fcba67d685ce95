use bok1929::data::{FoldObservationTable, Layer, ThicknessCategory};
use bok1929::geometry::StackedBarLayout;

fn layouts() -> Vec<(FoldObservationTable, StackedBarLayout)> {
    [FoldObservationTable::sulcal(), FoldObservationTable::gyral()]
        .into_iter()
        .map(|table| {
            let layout = StackedBarLayout::from_table(&table, 4);
            (table, layout)
        })
        .collect()
}

#[test]
fn stack_heights_equal_layer_totals() {
    for (table, layout) in layouts() {
        assert_eq!(layout.stacks.len(), Layer::ALL.len());
        for layer in Layer::ALL {
            let stack = layout.stack(layer);
            let summed: f32 = stack.segments.iter().map(|s| s.height()).sum();
            assert_eq!(summed, table.layer_total(layer) as f32, "{layer}");
            assert_eq!(stack.top(), table.layer_total(layer) as f32, "{layer}");
        }
    }
}

#[test]
fn stacks_are_placed_in_layer_order() {
    for (_, layout) in layouts() {
        let order: Vec<(Layer, f32)> = layout.stacks.iter().map(|s| (s.layer, s.x)).collect();
        let expected: Vec<(Layer, f32)> = Layer::ALL
            .iter()
            .enumerate()
            .map(|(i, &l)| (l, i as f32))
            .collect();
        assert_eq!(order, expected);
    }
}

#[test]
fn segment_colour_depends_only_on_category() {
    let all = layouts();
    for category in ThicknessCategory::ALL {
        for (_, layout) in &all {
            for stack in &layout.stacks {
                let seg = stack.segment(category);
                assert_eq!(seg.category, category);
                assert_eq!(seg.color, category.color());
            }
        }
    }
}

#[test]
fn layout_is_idempotent() {
    let table = FoldObservationTable::gyral();
    let a = StackedBarLayout::from_table(&table, 4);
    let b = StackedBarLayout::from_table(&table, 4);
    assert_eq!(a, b);
}

#[test]
fn custom_table_with_all_zero_layer_renders_empty_stack() {
    let mut columns = [[1u32; 6]; 5];
    for column in columns.iter_mut() {
        column[Layer::II.index()] = 0;
    }
    let table = FoldObservationTable::from_category_columns(
        bok1929::data::FoldType::Sulcal,
        columns,
    );
    let layout = StackedBarLayout::from_table(&table, 1);
    let stack = layout.stack(Layer::II);
    assert_eq!(stack.segments.len(), 5);
    assert_eq!(stack.top(), 0.0);
    assert_eq!(
        layout.fraction(Layer::II, ThicknessCategory::Unchanged),
        0.0
    );
    assert_eq!(layout.stack(Layer::I).top(), 5.0);
}
