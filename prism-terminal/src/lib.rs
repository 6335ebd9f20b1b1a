/// Terminal host for the prism scene core
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use nalgebra::Matrix3;
use prism_core::{RotationState, Scene};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod demo;
pub mod renderer;

pub use renderer::{AsciiRenderer, DrawCall, Lighting};

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    rotation: RotationState,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene,
            rotation: RotationState::zero(),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.update();
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.rotation.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.rotation.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.rotation.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.rotation.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_resolution(1, 0),
                KeyCode::Char('-') => self.adjust_resolution(-1, 0),
                KeyCode::Char(']') => self.adjust_resolution(0, 1),
                KeyCode::Char('[') => self.adjust_resolution(0, -1),
                _ => {}
            },
            Event::Resize(width, height) => {
                self.renderer = AsciiRenderer::new(width as usize, height as usize);
            }
            _ => {}
        }
        Ok(())
    }

    fn adjust_resolution(&mut self, d1: i32, d2: i32) {
        let settings = self.scene.settings();
        // keep the requested values at the smallest parameter any shape accepts
        let param1 = (settings.shape_parameter_1 + d1).max(1);
        let param2 = (settings.shape_parameter_2 + d2).max(3);
        if self.scene.set_shape_parameters(param1, param2) {
            log::info!("shape parameters now ({param1}, {param2})");
        }
    }

    fn update(&mut self) {
        // Continuous slow spin for demo effect
        self.rotation.rotate(0.0, 0.015, 0.0);
    }

    fn render(&mut self) -> io::Result<()> {
        let width = self.renderer.width() as u32;
        let height = self.renderer.height() as u32;
        let camera = self.scene.camera(width, height);
        let data = self.scene.render_data();

        let spin = self.rotation.matrix();
        let spin_normals: Matrix3<f32> = spin.fixed_view::<3, 3>(0, 0).into_owned();
        let lighting = Lighting {
            global: &data.global,
            lights: &data.lights,
            eye: camera.world_position(),
        };

        self.renderer.clear();
        for shape in &data.shapes {
            let call = DrawCall {
                buffer: self.scene.buffer(shape.kind),
                model: spin * shape.ctm,
                // the spin is a pure rotation, so it is its own inverse-transpose
                normal_matrix: spin_normals * shape.normal_matrix,
                material: &shape.material,
            };
            self.renderer.draw(&call, &camera, &lighting);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.present(&mut stdout)?;

        // Draw UI overlay
        let settings = self.scene.settings();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Prism | FPS: {:.1} | p1={} p2={} | WASD/Arrows=Rotate +/-=p1 [/]=p2 Q=Quit",
                self.fps, settings.shape_parameter_1, settings.shape_parameter_2
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
