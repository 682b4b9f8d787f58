use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array3;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use glvis::prelude::*;

fn write_node_field(n: usize) -> usize {
    let cells = IndexBox::new_3d([0, 0, 0], [n as i64 - 1, n as i64 - 1, n as i64 - 1]);
    let nodes = cells.grow_upper(1);

    let array: Array3<f32> = Array3::random((n + 1, n + 1, n + 1), Uniform::new(0., 10.));

    let mut field = BoxVector::new(vec![VariableKind::Node]);
    field.insert_block(0, 0, nodes, array).unwrap();

    let grid = BoxGrid::single_part(3, vec![cells]);
    let data = GlvisData::from_grid(&grid, &Placement::default(), &field, 0).unwrap();

    let mut writer: Vec<u8> = Vec::new();
    glvis::write_mesh(&mut writer, &data.mesh).unwrap();
    glvis::write_grid_function(&mut writer, &data.solution).unwrap();

    writer.len()
}

fn write_text_bench(c: &mut Criterion) {
    c.bench_function("write node field 16", |b| {
        b.iter(|| write_node_field(black_box(16)))
    });

    c.bench_function("write node field 32", |b| {
        b.iter(|| write_node_field(black_box(32)))
    });
}

criterion_group!(benches, write_text_bench);
criterion_main!(benches);
