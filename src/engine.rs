use raylib::prelude::*;

pub trait Engine {
    /// Loads assets and builds the initial scene. Returns false if there is nothing to show.
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool;
    fn handle_input(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread);
    /// Advances by `dt` and draws into `framebuffer`. Returns false once the engine is done.
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool;
    fn shutdown(&mut self);
}
