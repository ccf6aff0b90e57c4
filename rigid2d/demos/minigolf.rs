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
//! Mini-Golf Hole Example
//!
//! A single headless mini-golf hole that exercises most of the engine:
//!
//! - Walls via elastic physics collisions
//! - A bumper with restitution above 1 (the ball leaves faster than it came)
//! - A ramp that pushes the ball back downhill every tick it overlaps
//! - Friction via a drag creator
//! - The cup as a destructive collision that sinks the ball
//! - Contact events drained per tick, standing in for sound effects
//!
//! # Running
//!
//! ```bash
//! cargo run --example minigolf
//!
//! # putt harder
//! cargo run --example minigolf -- --power 180
//! ```

use rigid2d::forces::{
    create_drag, create_physics_collision, create_ramp_collision, ForceContext, RampProfile,
    SurfaceKind,
};
use rigid2d::{find_collision, Body, BodyHandle, ForceCreator, Polygon, Rgb, Scene, Vec2};

const DT: f64 = 1.0 / 60.0;
const BALL_RADIUS: f64 = 5.0;
const RAMP_HEIGHT: f64 = 40.0;
const STOP_SPEED: f64 = 0.5;

/// Regular polygon approximating a ball
fn ball_shape(center: Vec2, radius: f64, sides: usize) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / sides as f64;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn rect_shape(center: Vec2, width: f64, height: f64) -> Vec<Vec2> {
    let hw = width / 2.0;
    let hh = height / 2.0;
    vec![
        Vec2::new(center.x - hw, center.y - hh),
        Vec2::new(center.x + hw, center.y - hh),
        Vec2::new(center.x + hw, center.y + hh),
        Vec2::new(center.x - hw, center.y + hh),
    ]
}

/// Sinks the ball when it reaches the cup: stops it and marks it removed
struct CupForce {
    ball: BodyHandle,
    cup: BodyHandle,
}

impl ForceCreator for CupForce {
    fn apply(&mut self, ctx: &mut ForceContext<'_>) {
        let Some((ball, cup)) = ctx.body_pair_mut(self.ball, self.cup) else {
            return;
        };
        if find_collision(ball, cup).is_some() {
            ball.set_velocity(Vec2::ZERO);
            ball.remove();
            cup.remove();
        }
    }

    fn name(&self) -> &str {
        "cup"
    }
}

fn main() {
    let mut power = 120.0;
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--power" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<f64>() {
                        Ok(value) => power = value,
                        Err(_) => {
                            eprintln!("Warning: invalid power '{}', using {power}", args[i + 1]);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --power requires an argument");
                    std::process::exit(1);
                }
            }
            _ => i += 1,
        }
    }

    println!("=== Mini-Golf ===");
    println!("Putt power: {power}");
    println!();

    let mut scene = Scene::new();

    // the ball, putted up the course
    let mut ball_body = Body::new(
        Polygon::new(
            ball_shape(Vec2::new(0.0, 0.0), BALL_RADIUS, 16),
            Rgb::new(1.0, 1.0, 1.0),
        ),
        1.0,
    );
    ball_body.set_velocity(Vec2::new(0.3, 1.0).normalized() * power);
    let ball = scene.add_body(ball_body);

    // course walls
    let walls = [
        rect_shape(Vec2::new(-60.0, 150.0), 10.0, 400.0),
        rect_shape(Vec2::new(60.0, 150.0), 10.0, 400.0),
        rect_shape(Vec2::new(0.0, 355.0), 130.0, 10.0),
        rect_shape(Vec2::new(0.0, -55.0), 130.0, 10.0),
    ];
    for shape in walls {
        let wall = scene.add_body(Body::new(
            Polygon::new(shape, Rgb::new(0.4, 0.3, 0.2)),
            f64::INFINITY,
        ));
        create_physics_collision(&mut scene, wall, ball, 0.9, SurfaceKind::Wall);
    }

    // a bumper that kicks the ball back out harder than it came in
    let bumper = scene.add_body(Body::new(
        Polygon::new(
            ball_shape(Vec2::new(30.0, 120.0), 12.0, 8),
            Rgb::new(1.0, 0.2, 0.2),
        ),
        f64::INFINITY,
    ));
    create_physics_collision(&mut scene, bumper, ball, 1.8, SurfaceKind::Bouncy);

    // an uphill stretch that pushes the ball back toward the tee
    let ramp = scene.add_body(Body::new(
        Polygon::new(
            rect_shape(Vec2::new(0.0, 200.0), 110.0, RAMP_HEIGHT),
            Rgb::new(0.2, 0.6, 0.2),
        ),
        f64::INFINITY,
    ));
    create_ramp_collision(
        &mut scene,
        ball,
        ramp,
        -90.0,
        RampProfile {
            height: RAMP_HEIGHT,
            ball_radius: BALL_RADIUS,
        },
    );

    // green friction
    create_drag(&mut scene, 0.4, ball);

    // the cup
    let cup = scene.add_body(Body::new(
        Polygon::new(
            ball_shape(Vec2::new(0.0, 320.0), 7.0, 12),
            Rgb::new(0.0, 0.0, 0.0),
        ),
        f64::INFINITY,
    ));
    scene.add_bodies_force_creator(Box::new(CupForce { ball, cup }), vec![ball, cup]);

    println!("Bodies on the course: {}", scene.body_count());
    println!();

    let mut sunk = false;
    for step in 0..3600 {
        scene.tick(DT);

        for event in scene.drain_events() {
            let sound = match event.surface {
                SurfaceKind::Wall => "thud",
                SurfaceKind::Bouncy => "boing",
                SurfaceKind::Ramp => "rumble",
            };
            let t = step as f64 * DT;
            println!("[{t:6.2}s] {sound} (axis {:.2}, {:.2})", event.axis.x, event.axis.y);
        }

        let Some(ball_body) = scene.get(ball) else {
            sunk = true;
            let t = step as f64 * DT;
            println!("[{t:6.2}s] plunk — the ball is in the cup!");
            break;
        };

        if ball_body.velocity().length() < STOP_SPEED {
            let c = ball_body.centroid();
            let t = step as f64 * DT;
            println!("[{t:6.2}s] ball stopped at ({:.1}, {:.1})", c.x, c.y);
            break;
        }
    }

    println!();
    if sunk {
        println!("Hole complete.");
    } else {
        println!("Try again with more power: --power {}", power + 40.0);
    }
}
