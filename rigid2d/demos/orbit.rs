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
//! Two-Body Orbit Example
//!
//! A satellite circling a heavy primary under inverse-square gravity. The
//! example tracks total energy (kinetic + pairwise potential) across the run
//! and reports the relative drift at the end, which exercises the
//! Simpson-blend integrator on a stiff curved trajectory.
//!
//! # Running
//!
//! ```bash
//! cargo run --example orbit --release
//!
//! # more revolutions, smaller steps
//! cargo run --example orbit --release -- --steps 200000 --dt 0.0005
//! ```

use rigid2d::forces::create_newtonian_gravity;
use rigid2d::{Body, Polygon, Rgb, Scene, Vec2};

const G: f64 = 100.0;
const PRIMARY_MASS: f64 = 1.0e4;
const SATELLITE_MASS: f64 = 1.0;
const ORBIT_RADIUS: f64 = 50.0;

fn disk(center: Vec2, radius: f64) -> Polygon {
    let vertices = (0..12)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / 12.0;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    Polygon::new(vertices, Rgb::new(1.0, 1.0, 0.5))
}

fn total_energy(scene: &Scene) -> f64 {
    let kinetic: f64 = (0..scene.body_count())
        .map(|i| scene.body(i).kinetic_energy())
        .sum();

    let mut potential = 0.0;
    for i in 0..scene.body_count() {
        for j in (i + 1)..scene.body_count() {
            let a = scene.body(i);
            let b = scene.body(j);
            let r = (a.centroid() - b.centroid()).length();
            if r > 0.0 {
                potential -= G * a.mass() * b.mass() / r;
            }
        }
    }

    kinetic + potential
}

fn main() {
    let mut steps: usize = 50_000;
    let mut dt = 0.001;
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--steps" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(value) => steps = value,
                        Err(_) => eprintln!("Warning: invalid steps '{}'", args[i + 1]),
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --steps requires an argument");
                    std::process::exit(1);
                }
            }
            "--dt" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<f64>() {
                        Ok(value) => dt = value,
                        Err(_) => eprintln!("Warning: invalid dt '{}'", args[i + 1]),
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --dt requires an argument");
                    std::process::exit(1);
                }
            }
            _ => i += 1,
        }
    }

    println!("=== Two-Body Orbit ===");
    println!("G = {G}, primary mass = {PRIMARY_MASS:.0}, orbit radius = {ORBIT_RADIUS}");
    println!("{steps} steps of dt = {dt}");
    println!();

    let mut scene = Scene::new();

    // a heavy but finite-mass primary so momentum exchange is visible
    let primary = scene.add_body(Body::new(disk(Vec2::ZERO, 10.0), PRIMARY_MASS));

    // circular-orbit speed v = sqrt(G M / r)
    let orbit_speed = (G * PRIMARY_MASS / ORBIT_RADIUS).sqrt();
    let mut satellite_body = Body::new(disk(Vec2::new(ORBIT_RADIUS, 0.0), 2.0), SATELLITE_MASS);
    satellite_body.set_velocity(Vec2::new(0.0, orbit_speed));
    let satellite = scene.add_body(satellite_body);

    create_newtonian_gravity(&mut scene, G, primary, satellite);

    let initial_energy = total_energy(&scene);
    println!("Initial energy: {initial_energy:.6e}");
    println!();

    let report_every = (steps / 10).max(1);
    for step in 1..=steps {
        scene.tick(dt);

        if step % report_every == 0 {
            let pos = scene.get(satellite).map(Body::centroid).unwrap_or(Vec2::ZERO);
            let r = (pos - scene.get(primary).map(Body::centroid).unwrap_or(Vec2::ZERO)).length();
            println!(
                "step {step:>7}: satellite at ({:>8.2}, {:>8.2}), r = {r:.2}",
                pos.x, pos.y
            );
        }
    }

    let final_energy = total_energy(&scene);
    let drift = ((final_energy - initial_energy) / initial_energy).abs();
    println!();
    println!("Final energy:   {final_energy:.6e}");
    println!("Relative drift: {drift:.3e} ({:.4}%)", drift * 100.0);
}
