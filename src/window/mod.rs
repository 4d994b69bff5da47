use std::collections::HashSet;
use std::convert::TryFrom;
use std::time::{Duration, Instant};
use orom_miniquad::*;

pub mod pacing;
use pacing::TickPacer;
use crate::audio::{SoundDriver, SoundHandle};
use crate::rendering::Rgba;
use crate::rendering::blittable::{BufferProvider, BufferProviderMut, SizedSurface};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum KeyCode {
    Space,
    A,
    D,
    S,
    W,
    Right,
    Left,
    Down,
    Up
}

impl TryFrom<orom_miniquad::KeyCode> for KeyCode {
    type Error = ();

    fn try_from(value: orom_miniquad::KeyCode) -> Result<Self, Self::Error> {
        match value {
            orom_miniquad::KeyCode::A => Ok(KeyCode::A),
            orom_miniquad::KeyCode::D => Ok(KeyCode::D),
            orom_miniquad::KeyCode::S => Ok(KeyCode::S),
            orom_miniquad::KeyCode::W => Ok(KeyCode::W),
            orom_miniquad::KeyCode::Space => Ok(KeyCode::Space),
            orom_miniquad::KeyCode::Right => Ok(KeyCode::Right),
            orom_miniquad::KeyCode::Left => Ok(KeyCode::Left),
            orom_miniquad::KeyCode::Down => Ok(KeyCode::Down),
            orom_miniquad::KeyCode::Up => Ok(KeyCode::Up),
            _ => Err(()),
        }
    }
}

/// The software framebuffer handed to a [`ContextHandler`] every tick,
/// together with keyboard state and the optional audio output.
pub struct BlitContext {
    sound_driver: Option<SoundDriver>,
    buffer_width: usize,
    buffer_height: usize,
    buffer_pixels: Vec<Rgba>,
    keys_pressed: HashSet<KeyCode>
}

impl SizedSurface for BlitContext {
    fn get_width(&self) -> usize {
        self.buffer_width
    }

    fn get_height(&self) -> usize {
        self.buffer_height
    }
}

impl BufferProvider<Rgba> for BlitContext {
    fn get_buffer(&self) -> &[Rgba] { &self.buffer_pixels }
}

impl BufferProviderMut<Rgba> for BlitContext {
    fn get_buffer_mut(&mut self) -> &mut [Rgba] { &mut self.buffer_pixels }
}

impl BlitContext {
    /// A silent context with nothing pressed
    pub fn new(buffer_width: usize, buffer_height: usize) -> Self {
        Self {
            sound_driver: None,
            buffer_width,
            buffer_height,
            buffer_pixels: vec![[0, 0, 0, 255]; buffer_width * buffer_height],
            keys_pressed: HashSet::new()
        }
    }

    pub fn with_sound_driver(self, sound_driver: Option<SoundDriver>) -> Self {
        Self {
            sound_driver,
            ..self
        }
    }

    pub fn borrow_sound_driver(&mut self) -> Option<&mut SoundDriver> {
        self.sound_driver.as_mut()
    }

    /// Returns `None` when there is no audio output to play on
    pub fn play_sound(&mut self, sound: SoundHandle) -> Option<usize> {
        self.borrow_sound_driver().map(|driver| driver.play_sound(sound))
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if (0..self.buffer_width as i32).contains(&x) && (0..self.buffer_height as i32).contains(&y) {
            let idx = y as usize * self.buffer_width + x as usize;
            self.buffer_pixels[idx] = color;
        }
    }

    pub fn is_key_pressed(&self, key_code: KeyCode) -> bool {
        self.keys_pressed.contains(&key_code)
    }

    pub fn press_key(&mut self, key_code: KeyCode) {
        self.keys_pressed.insert(key_code);
    }

    pub fn release_key(&mut self, key_code: KeyCode) {
        self.keys_pressed.remove(&key_code);
    }
}

pub trait ContextHandler {
    fn get_window_title(&self) -> &'static str;
    fn get_window_size(&self) -> (usize, usize);
    /// Fixed simulation step. `None` means "as fast as the display refreshes"
    fn get_tick_interval(&self) -> Option<Duration> { None }
    fn on_key_down(&mut self, _ctx: &mut BlitContext, _key_code: KeyCode, _repeat: bool){}
    fn init(&mut self, ctx: &mut BlitContext);
    fn update(&mut self, ctx: &mut BlitContext, dt: f32);
}

pub struct Stage<CtxHandler: ContextHandler> {
    pipeline: Pipeline,
    bindings: Bindings,
    buffer_texture: Texture,
    context_data: BlitContext,
    handler: CtxHandler,
    last_instant: Instant,
    pacer: Option<TickPacer>
}

impl<CtxHandler: ContextHandler> Stage<CtxHandler> {
    pub fn new(ctx: &mut Context, handler: CtxHandler, sound_driver: Option<SoundDriver>) -> Stage<CtxHandler> {
        #[rustfmt::skip]
        let vertices: [f32; 16] = [
            -1.0, -1.0,    0.0, 0.0,
             1.0, -1.0,    1.0, 0.0,
             1.0,  1.0,    1.0, 1.0,
            -1.0,  1.0,    0.0, 1.0,
        ];
        let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];

        let vertex_buffer = Buffer::immutable(
            ctx,
            BufferType::VertexBuffer,
            &vertices
        );

        let index_buffer = Buffer::immutable(
            ctx,
            BufferType::IndexBuffer,
            &indices
        );

        let (buffer_width, buffer_height) = handler.get_window_size();

        let mut context_data = BlitContext::new(buffer_width, buffer_height)
            .with_sound_driver(sound_driver);

        let mut handler = handler;
        handler.init(&mut context_data);

        let buffer_texture = Texture::from_data_and_format(
            ctx,
            bytemuck::cast_slice(context_data.buffer_pixels.as_slice()),
            TextureParams {
                format: TextureFormat::RGBA8,
                wrap: TextureWrap::Clamp,
                filter: FilterMode::Nearest,
                width: buffer_width as _,
                height: buffer_height as _,
                depth: 1
            },
            TextureKind::Texture2D
        );

        let bindings = Bindings {
            vertex_buffers: vec![vertex_buffer],
            index_buffer,
            images: vec![buffer_texture]
        };

        let shader = Shader::new(
            ctx,
            screen_shader::VERTEX,
            screen_shader::FRAGMENT,
            screen_shader::meta()
        ).unwrap(); // crash if failed to create a shader

        let pipeline = Pipeline::new(
            ctx,
            &[BufferLayout::default()],
            &[
                VertexAttribute::new("pos", VertexFormat::Float2),
                VertexAttribute::new("uv", VertexFormat::Float2),
            ],
            shader
        );

        let pacer = handler
            .get_tick_interval()
            .map(|interval| TickPacer::new(interval, Instant::now()));

        Stage {
            pipeline,
            bindings,
            buffer_texture,
            context_data,
            handler,
            last_instant: Instant::now(),
            pacer
        }
    }
}

impl<CtxHandler: ContextHandler> EventHandler for Stage<CtxHandler> {
    fn update(&mut self, ctx: &mut Context) {
        let dt = self.last_instant.elapsed().as_micros() as f32 / 1000000.0;
        self.last_instant = Instant::now();
        if let Some(driver) = self.context_data.borrow_sound_driver() {
            driver.maintain();
        }
        self.handler.update(&mut self.context_data, dt);
        self.buffer_texture.update(ctx, bytemuck::cast_slice(self.context_data.buffer_pixels.as_slice()));
    }

    fn draw(&mut self, ctx: &mut Context) {
        ctx.begin_default_pass(PassAction::clear_color(0.0, 0.0, 0.0, 1.0));
        { // present the framebuffer as a single full screen quad
            ctx.apply_pipeline(&self.pipeline);
            ctx.apply_bindings(&self.bindings);
            ctx.draw(0, 6, 1);
        }
        ctx.end_render_pass();

        ctx.commit_frame();

        if let Some(pacer) = &mut self.pacer {
            if let Some(pause) = pacer.schedule_next(Instant::now()) {
                std::thread::sleep(pause);
            }
        }
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        keycode: orom_miniquad::KeyCode,
        _keymods: orom_miniquad::KeyMods,
        repeat: bool,
    ) {
        if let Ok(key_code) = KeyCode::try_from(keycode) {
            self.context_data.press_key(key_code);
            self.handler.on_key_down(
                &mut self.context_data,
                key_code,
                repeat
            );
        }
    }

    fn key_up_event(
        &mut self,
        _ctx: &mut Context,
        keycode: orom_miniquad::KeyCode,
        _keymods: orom_miniquad::KeyMods
    ) {
        // held-key state only, movement is sampled from it every tick
        if let Ok(key_code) = KeyCode::try_from(keycode) {
            self.context_data.release_key(key_code);
        }
    }
}

mod screen_shader {
    use orom_miniquad::*;

    pub const VERTEX:&str = r#"#version 100
        attribute vec2 pos;
        attribute vec2 uv;

        varying lowp vec2 texcoord;

        void main() {
            gl_Position = vec4(pos, 0.0, 1.0);
            texcoord = vec2(uv.x, 1.0 - uv.y);
        }
    "#;

    pub const FRAGMENT:&str = r#"#version 100
        varying lowp vec2 texcoord;

        uniform sampler2D tex;

        void main() {
            gl_FragColor = vec4(texture2D(tex, texcoord).xyz, 1.0);
        }
    "#;

    pub fn meta() -> ShaderMeta {
        ShaderMeta {
            images: vec!["tex".to_string()],
            uniforms: UniformBlockLayout { uniforms: Vec::new() }
        }
    }
}

pub fn start<CtxHandler: 'static + ContextHandler>(handler: CtxHandler, sound_driver: Option<SoundDriver>) {
    let (window_width, window_height) = handler.get_window_size();
    let conf = conf::Conf {
        window_title: handler.get_window_title().to_string(),
        window_width: window_width as _,
        window_height: window_height as _,
        high_dpi: false,
        fullscreen: false,
        sample_count: 1,
        window_resizable: false
    };

    log::info!("Opening a {}x{} window", window_width, window_height);
    orom_miniquad::start(conf, |mut ctx| {
        UserData::owning(Stage::new(&mut ctx, handler, sound_driver), ctx)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_keys_are_rejected() {
        assert_eq!(KeyCode::try_from(orom_miniquad::KeyCode::Left), Ok(KeyCode::Left));
        assert_eq!(KeyCode::try_from(orom_miniquad::KeyCode::W), Ok(KeyCode::W));
        assert!(KeyCode::try_from(orom_miniquad::KeyCode::F5).is_err());
    }

    #[test]
    fn test_context_tracks_held_keys() {
        let mut ctx = BlitContext::new(2, 2);
        ctx.press_key(KeyCode::Space);
        assert!(ctx.is_key_pressed(KeyCode::Space));
        ctx.release_key(KeyCode::Space);
        assert!(!ctx.is_key_pressed(KeyCode::Space));
    }

    #[test]
    fn test_silent_context_drops_sounds() {
        let mut ctx = BlitContext::new(2, 2);
        assert!(ctx.borrow_sound_driver().is_none());
    }

    #[test]
    fn test_put_pixel_ignores_out_of_bounds() {
        let mut ctx = BlitContext::new(2, 2);
        ctx.put_pixel(-1, 0, [9, 9, 9, 255]);
        ctx.put_pixel(1, 1, [9, 9, 9, 255]);
        assert_eq!(ctx.get_buffer()[3], [9, 9, 9, 255]);
        assert_eq!(ctx.get_buffer().iter().filter(|it| **it == [9, 9, 9, 255]).count(), 1);
    }
}
