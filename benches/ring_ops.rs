//! Benchmarks for index construction and ring queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meshring::algo::neighborhood::{
    find_edge_adjacent_faces, find_neighbor_edges, find_neighbor_vertices,
    find_vertex_adjacent_faces,
};
use meshring::prelude::*;
use nalgebra::Point3;

fn create_grid_store(n: usize) -> MeshStore {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    MeshStore::new(vertices, faces)
}

fn bench_index_construction(c: &mut Criterion) {
    let store = create_grid_store(100);

    c.bench_function("build_index_grid_100x100", |b| {
        b.iter(|| {
            let index: AdjacencyIndex = AdjacencyIndex::build(black_box(&store)).unwrap();
            index
        });
    });
}

fn bench_ring_queries(c: &mut Criterion) {
    let store = create_grid_store(100);
    let index: AdjacencyIndex = AdjacencyIndex::build(&store).unwrap();
    let center = 50 * 101 + 50;

    c.bench_function("vertex_ring_5", |b| {
        b.iter(|| find_neighbor_vertices(&index, VertexId::new(black_box(center)), 5).unwrap());
    });

    c.bench_function("edge_ring_5", |b| {
        b.iter(|| find_neighbor_edges(&index, EdgeId::new(black_box(3 * center)), 5).unwrap());
    });

    c.bench_function("edge_adjacent_face_ring_5", |b| {
        b.iter(|| find_edge_adjacent_faces(&index, FaceId::new(black_box(2 * center)), 5).unwrap());
    });

    c.bench_function("vertex_adjacent_face_ring_5", |b| {
        b.iter(|| find_vertex_adjacent_faces(&index, FaceId::new(black_box(2 * center)), 5).unwrap());
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut session: MeshSession = MeshSession::new(create_grid_store(100)).unwrap();
    let picks: Vec<Primitive> = (0..10).map(|i| Primitive::Face(FaceId::new(i * 1500))).collect();

    c.bench_function("select_10_faces_ring_5", |b| {
        b.iter(|| session.select(black_box(&picks)).unwrap());
    });
}

criterion_group!(benches, bench_index_construction, bench_ring_queries, bench_selection);
criterion_main!(benches);
