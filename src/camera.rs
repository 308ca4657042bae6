use crossterm::Command;
use crossterm::style::Color;
use crossterm::style::ResetColor;
use crossterm::style::SetForegroundColor;

use crate::ScreenSize;
use crate::ext::term::ColorInterpolationExt;
use crate::quadtree::NodeID;
use crate::quadtree::Point;
use crate::quadtree::QuadTree;

/// Hex values of braille dots
///
/// ```text
///      1   8
///      2  10
///      4  20
///     40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Zoom factor per step
const ZOOM_MULT: f32 = 1.3;

/// Pan distance per step, in pixels
const PAN_STEP: f32 = 10.0;

pub struct Camera {
    /// The cell buffer. One draw level per pixel: 0 is unlit, and a lit
    /// pixel keeps the highest level drawn onto it.
    cb: Vec<u8>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Draw level of each braille character, the max over its pixels
    lv: Vec<u8>,

    /// Width of the framebuffer, in pixels
    w: usize,

    /// Height of the framebuffer, in pixels
    h: usize,

    /// World `x` at the center of the view
    x: f32,

    /// World `y` at the center of the view
    y: f32,

    /// Pixels per world unit
    scale: f32,
}

impl Camera {
    pub fn new(cols: ScreenSize, rows: ScreenSize) -> Self {
        // Each terminal cell is a 2x4 block of braille dots
        let (w, h) = (cols as usize * 2, rows as usize * 4);

        let cb = vec![0; w * h];

        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];
        let lv = vec![0; bw * bh];

        // Each braille character is 3 bytes, and newlines one byte. Since we need `bh` newlines,
        // this gives us a framebuffer of length `3 * (bw * bh) + bh`.
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        let mut cam = Self {
            cb,
            fb,
            cp,
            lv,
            w,
            h,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        };
        cam.fit();

        cam
    }

    /// Rebuild the buffers for a new terminal size, keeping the view.
    pub fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        let (w, h) = (cols as usize * 2, rows as usize * 4);
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        self.w = w;
        self.h = h;
        self.cb = vec![0; w * h];
        self.cp = vec![BRAILLE_EMPTY; bw * bh];
        self.lv = vec![0; bw * bh];
    }

    /// Scale so the root tile takes up most of the shorter screen axis.
    fn fit(&mut self) {
        self.scale = 0.9 * self.w.min(self.h) as f32;
    }

    /// Recenter on the origin and refit the zoom.
    pub fn reset_view(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.fit();
    }

    pub fn zoom_in(&mut self) {
        self.scale *= ZOOM_MULT;
    }

    pub fn zoom_out(&mut self) {
        self.scale /= ZOOM_MULT;
    }

    pub fn move_left(&mut self) {
        self.x -= PAN_STEP / self.scale;
    }

    pub fn move_right(&mut self) {
        self.x += PAN_STEP / self.scale;
    }

    pub fn move_up(&mut self) {
        self.y += PAN_STEP / self.scale;
    }

    pub fn move_down(&mut self) {
        self.y -= PAN_STEP / self.scale;
    }

    /// World point to framebuffer pixel coordinates. Screen `y` grows down,
    /// world `y` grows up.
    fn to_px(&self, p: Point) -> (f32, f32) {
        let px = (p.x - self.x) * self.scale + self.w as f32 / 2.0;
        let py = (self.y - p.y) * self.scale + self.h as f32 / 2.0;

        (px, py)
    }

    /// The world point under a terminal cell, taken at the center of the
    /// cell's pixel block.
    pub fn world_at(&self, col: u16, row: u16) -> Point {
        let px = col as f32 * 2.0 + 1.0;
        let py = row as f32 * 4.0 + 2.0;

        Point::new(
            (px - self.w as f32 / 2.0) / self.scale + self.x,
            self.y - (py - self.h as f32 / 2.0) / self.scale,
        )
    }

    /// Whether any part of the world rectangle lands on screen.
    pub fn visible(&self, min: Point, max: Point) -> bool {
        let (x0, y0) = self.to_px(Point::new(min.x, max.y));
        let (x1, y1) = self.to_px(Point::new(max.x, min.y));

        x1 >= 0.0 && y1 >= 0.0 && x0 < self.w as f32 && y0 < self.h as f32
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize, level: u8) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = self.cb[i].max(level);
    }

    /// Draw the outline of a world rectangle, clipped to the screen.
    pub fn draw_rect(&mut self, min: Point, max: Point, level: u8) {
        // top-left and bottom-right corners, in pixels
        let (x0, y0) = self.to_px(Point::new(min.x, max.y));
        let (x1, y1) = self.to_px(Point::new(max.x, min.y));

        let (x0, y0) = (x0.round() as i64, y0.round() as i64);
        let (x1, y1) = (x1.round() as i64, y1.round() as i64);

        let (w, h) = (self.w as i64, self.h as i64);
        if x1 < 0 || y1 < 0 || x0 >= w || y0 >= h {
            return;
        }

        for x in x0.max(0)..=x1.min(w - 1) {
            if y0 >= 0 {
                self.draw_pixel(x as usize, y0 as usize, level);
            }

            if y1 < h {
                self.draw_pixel(x as usize, y1 as usize, level);
            }
        }

        for y in y0.max(0)..=y1.min(h - 1) {
            if x0 >= 0 {
                self.draw_pixel(x0 as usize, y as usize, level);
            }

            if x1 < w {
                self.draw_pixel(x1 as usize, y as usize, level);
            }
        }
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(0);
    }

    // compute new codepoints and per-character draw levels
    fn pack(&mut self) {
        let bw = self.w.div_ceil(2);

        self.cp.fill(BRAILLE_EMPTY);
        self.lv.fill(0);

        for (n, &px) in self.cb.iter().enumerate() {
            if px == 0 {
                continue;
            }

            let (x, y) = self.xy_to(n);
            let i = (y / 4) * bw + (x / 2);

            self.cp[i] += Self::get_hex_value(x, y);
            self.lv[i] = self.lv[i].max(px);
        }
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?". This will be the technique used for drawing the tree
    pub fn render(&mut self) -> &str {
        self.pack();

        let bw = self.w.div_ceil(2);

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(::std::char::from_u32(c).unwrap());
        }
        self.fb.push('\n');

        &self.fb
    }

    /// Like [`Camera::render`], but wraps each character in a foreground
    /// color picked by draw level: level 1 renders white, and levels fade
    /// toward half-white at `levels`.
    pub fn render_shaded(&mut self, levels: u32) -> String {
        self.pack();

        let bw = self.w.div_ceil(2);

        let mut out = String::with_capacity(4 * self.fb.capacity());
        let mut current = None;

        for (i, (&c, &level)) in self.cp.iter().zip(self.lv.iter()).enumerate() {
            if i > 0 && i % bw == 0 {
                out.push('\n');
            }

            let color = shade(level, levels);
            if current != Some(color) {
                let _ = SetForegroundColor(color).write_ansi(&mut out);
                current = Some(color);
            }

            out.push(::std::char::from_u32(c).unwrap());
        }
        out.push('\n');

        let _ = ResetColor.write_ansi(&mut out);

        out
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

/// Foreground color for a draw level. Level 0 marks an empty character and
/// keeps the terminal's default color.
fn shade(level: u8, levels: u32) -> Color {
    const NEAR: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const FAR: Color = Color::Rgb {
        r: 127,
        g: 127,
        b: 127,
    };

    if level == 0 || levels == 0 {
        return Color::Reset;
    }

    let depth = (level - 1) as f64;
    let p = ((levels as f64 - depth) / levels as f64).clamp(0.0, 1.0);

    NEAR.lerp(&FAR, p)
}

fn depth_level(depth: u32) -> u8 {
    (depth + 1).min(u8::MAX as u32) as u8
}

/// Draw every reachable node of the tree as the outline of its tile, deeper
/// nodes on higher draw levels so they shade darker.
pub fn draw_tree(cam: &mut Camera, tree: &QuadTree) {
    draw_node(cam, tree, tree.root);
}

fn draw_node(cam: &mut Camera, tree: &QuadTree, id: NodeID) {
    let node = tree.get(id);
    let tile = node.tile();

    if !cam.visible(tile.min, tile.max) {
        return;
    }

    // Too small to see. Children are smaller still, so stop descending
    if node.size * cam.scale < 1.0 {
        return;
    }

    cam.draw_rect(tile.min, tile.max, depth_level(node.depth));

    if let Some(children) = node.children {
        for child in children {
            draw_node(cam, tree, child);
        }
    }
}

#[cfg(test)]
mod test {
    use crossterm::style::Color;

    use crate::camera::Camera;
    use crate::camera::draw_tree;
    use crate::camera::shade;
    use crate::quadtree::Point;
    use crate::quadtree::QuadTree;

    #[test]
    fn a_single_pixel_is_one_braille_dot() {
        let mut cam = Camera::new(1, 1);
        cam.draw_pixel(0, 0, 1);

        assert_eq!(cam.render(), "\u{2801}\n");
    }

    #[test]
    fn a_full_block_is_a_full_braille_character() {
        let mut cam = Camera::new(1, 1);
        for x in 0..2 {
            for y in 0..4 {
                cam.draw_pixel(x, y, 1);
            }
        }

        assert_eq!(cam.render(), "\u{28ff}\n");
    }

    #[test]
    fn deeper_draws_win_the_pixel() {
        let mut cam = Camera::new(1, 1);
        cam.draw_pixel(0, 0, 1);
        cam.draw_pixel(0, 0, 3);
        cam.draw_pixel(0, 0, 2);

        assert_eq!(cam.cb[0], 3);
    }

    #[test]
    fn rects_rasterize_as_outlines() {
        let mut cam = Camera::new(2, 1);
        cam.x = 0.0;
        cam.y = 0.0;
        cam.scale = 1.0;

        // maps to the pixel rectangle (0, 0) through (3, 3)
        cam.draw_rect(Point::new(-2.0, -1.0), Point::new(1.0, 2.0), 1);

        assert_eq!(cam.render(), "\u{28cf}\u{28f9}\n");
    }

    #[test]
    fn offscreen_rects_clip_cleanly() {
        let mut cam = Camera::new(2, 1);
        cam.x = 0.0;
        cam.y = 0.0;
        cam.scale = 1.0;

        // straddles the left screen edge, so only the top, bottom and right
        // edges land
        cam.draw_rect(Point::new(-10.0, -1.0), Point::new(-1.0, 2.0), 1);

        assert_eq!(cam.render(), "\u{28f9}\u{2800}\n");
    }

    #[test]
    fn fully_offscreen_rects_draw_nothing() {
        let mut cam = Camera::new(2, 1);
        cam.x = 0.0;
        cam.y = 0.0;
        cam.scale = 1.0;

        cam.draw_rect(Point::new(5.0, 5.0), Point::new(6.0, 6.0), 1);

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn world_at_inverts_the_pixel_mapping() {
        let mut cam = Camera::new(10, 5);
        cam.x = 0.25;
        cam.y = -0.5;
        cam.scale = 2.0;

        // cell (5, 2) centers on pixel (11, 10)
        let p = cam.world_at(5, 2);
        let (px, py) = cam.to_px(p);

        assert!((px - 11.0).abs() < 1e-4);
        assert!((py - 10.0).abs() < 1e-4);
    }

    #[test]
    fn shade_fades_with_depth() {
        assert_eq!(shade(0, 5), Color::Reset);
        assert_eq!(
            shade(1, 5),
            Color::Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(
            shade(2, 2),
            Color::Rgb {
                r: 191,
                g: 191,
                b: 191
            }
        );
        assert_eq!(
            shade(6, 5),
            Color::Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn the_whole_tree_lands_on_screen() {
        let mut tree = QuadTree::new();
        tree.split(tree.root);

        let mut cam = Camera::new(20, 10);
        cam.reset();
        draw_tree(&mut cam, &tree);

        let frame = cam.render().to_string();
        assert!(frame.chars().any(|c| c != '\u{2800}' && c != '\n'));

        // the children's tiles partition the root's tile, so every root
        // outline pixel is overdrawn at their deeper level: the whole
        // frame shades half-white and the root's white survives nowhere
        let shaded = cam.render_shaded(tree.height());
        assert!(!shaded.contains("38;2;255;255;255"));
        assert!(shaded.contains("38;2;127;127;127"));
    }

    #[test]
    fn an_unsplit_root_shades_white() {
        let tree = QuadTree::new();

        let mut cam = Camera::new(20, 10);
        cam.reset();
        draw_tree(&mut cam, &tree);

        let shaded = cam.render_shaded(tree.height());
        assert!(shaded.contains("38;2;255;255;255"));
        assert!(!shaded.contains("38;2;127;127;127"));
    }
}
