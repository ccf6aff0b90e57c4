// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for scene throughput and the collision detector
//!
//! These benchmarks measure:
//! - Full-tick throughput at varying body counts (integration only)
//! - Force-creator overhead (drag on every body, springs in a chain)
//! - Raw SAT cost for colliding and separated polygon pairs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rigid2d::collision::find_polygon_collision;
use rigid2d::forces::{create_drag, create_spring};
use rigid2d::{Body, Polygon, Rgb, Scene, Vec2};

fn square_body(center: Vec2, side: f64, mass: f64) -> Body {
    let h = side / 2.0;
    let polygon = Polygon::new(
        vec![
            Vec2::new(center.x - h, center.y - h),
            Vec2::new(center.x + h, center.y - h),
            Vec2::new(center.x + h, center.y + h),
            Vec2::new(center.x - h, center.y + h),
        ],
        Rgb::new(1.0, 1.0, 1.0),
    );
    Body::new(polygon, mass)
}

// Scatter bodies on a grid, far enough apart that nothing collides
fn setup_scene(body_count: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..body_count {
        let center = Vec2::new((i % 32) as f64 * 30.0, (i / 32) as f64 * 30.0);
        let mut body = square_body(center, 10.0, 1.0);
        body.set_velocity(Vec2::new(1.0, -0.5));
        scene.add_body(body);
    }
    scene
}

fn bench_tick_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_throughput");

    for body_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*body_count as u64));

        group.bench_with_input(
            BenchmarkId::new("free_motion", body_count),
            body_count,
            |b, &body_count| {
                let mut scene = setup_scene(body_count);
                b.iter(|| scene.tick(black_box(1.0 / 60.0)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("drag_on_all", body_count),
            body_count,
            |b, &body_count| {
                let mut scene = setup_scene(body_count);
                let handles: Vec<_> = scene.iter().map(|(h, _)| h).collect();
                for h in handles {
                    create_drag(&mut scene, 0.5, h);
                }
                b.iter(|| scene.tick(black_box(1.0 / 60.0)));
            },
        );
    }

    group.finish();
}

fn bench_spring_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_chain");
    group.sample_size(50);

    for link_count in [10, 100].iter() {
        group.throughput(Throughput::Elements(*link_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(link_count),
            link_count,
            |b, &link_count| {
                let mut scene = Scene::new();
                let mut prev =
                    scene.add_body(square_body(Vec2::ZERO, 2.0, f64::INFINITY));
                for i in 1..=link_count {
                    let next =
                        scene.add_body(square_body(Vec2::new(i as f64 * 10.0, 0.0), 2.0, 1.0));
                    create_spring(&mut scene, 3.0, prev, next);
                    prev = next;
                }
                b.iter(|| scene.tick(black_box(1.0 / 240.0)));
            },
        );
    }

    group.finish();
}

fn bench_sat_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat_detection");

    let hexagon = |center: Vec2, radius: f64| -> Vec<Vec2> {
        (0..6)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / 6.0;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect()
    };

    let a = hexagon(Vec2::ZERO, 10.0);
    let overlapping = hexagon(Vec2::new(12.0, 3.0), 10.0);
    let separated = hexagon(Vec2::new(25.0, 0.0), 10.0);

    group.bench_function("hexagons_overlapping", |b| {
        b.iter(|| find_polygon_collision(black_box(&a), black_box(&overlapping)))
    });

    // short-circuits on the first separating axis
    group.bench_function("hexagons_separated", |b| {
        b.iter(|| find_polygon_collision(black_box(&a), black_box(&separated)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tick_throughput,
    bench_spring_chain,
    bench_sat_detection
);
criterion_main!(benches);
