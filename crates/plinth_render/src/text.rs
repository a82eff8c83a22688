//! 8x8 bitmap-font atlas
//!
//! Bakes the `font8x8` ASCII glyph set into a single R8Unorm texture at
//! startup. Glyphs are fixed 8x8 cells laid out in a 16x8 grid, so the
//! atlas coordinates for a character are pure arithmetic and text
//! measurement is exact (monospace, 8px advance times scale).

use plinth_math::Vec2;

/// Glyph cell size in pixels
pub const GLYPH_SIZE: u32 = 8;
/// Atlas grid: 16 columns x 8 rows = 128 ASCII glyphs
pub const ATLAS_COLS: u32 = 16;
pub const ATLAS_ROWS: u32 = 8;
/// Atlas texture dimensions
pub const ATLAS_WIDTH: u32 = ATLAS_COLS * GLYPH_SIZE;
pub const ATLAS_HEIGHT: u32 = ATLAS_ROWS * GLYPH_SIZE;

/// The baked font atlas texture
pub struct BitmapFont {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl BitmapFont {
    /// Rasterize the ASCII set into an atlas texture
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let pixels = bake_atlas();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Font Atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_WIDTH,
                height: ATLAS_HEIGHT,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(ATLAS_WIDTH),
                rows_per_image: Some(ATLAS_HEIGHT),
            },
            wgpu::Extent3d {
                width: ATLAS_WIDTH,
                height: ATLAS_HEIGHT,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            _texture: texture,
            view,
        }
    }

    /// Texture view for binding into the text pipeline
    pub fn atlas_view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Rasterize all 128 legacy glyphs into an R8 pixel buffer
fn bake_atlas() -> Vec<u8> {
    let mut pixels = vec![0u8; (ATLAS_WIDTH * ATLAS_HEIGHT) as usize];
    for (code, glyph) in font8x8::legacy::BASIC_LEGACY.iter().enumerate() {
        let cell_x = (code as u32 % ATLAS_COLS) * GLYPH_SIZE;
        let cell_y = (code as u32 / ATLAS_COLS) * GLYPH_SIZE;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // font8x8 packs rows LSB-first (bit 0 is the leftmost pixel)
                if bits & (1 << col) != 0 {
                    let x = cell_x + col;
                    let y = cell_y + row as u32;
                    pixels[(y * ATLAS_WIDTH + x) as usize] = 255;
                }
            }
        }
    }
    pixels
}

/// Atlas UV rectangle (min, max) for a character
///
/// Characters outside the 7-bit ASCII range fall back to `?`.
pub fn glyph_uv(ch: char) -> ([f32; 2], [f32; 2]) {
    let code = if (ch as u32) < 128 { ch as u32 } else { b'?' as u32 };
    let cell_x = (code % ATLAS_COLS) as f32;
    let cell_y = (code / ATLAS_COLS) as f32;
    let u0 = cell_x / ATLAS_COLS as f32;
    let v0 = cell_y / ATLAS_ROWS as f32;
    let u1 = (cell_x + 1.0) / ATLAS_COLS as f32;
    let v1 = (cell_y + 1.0) / ATLAS_ROWS as f32;
    ([u0, v0], [u1, v1])
}

/// Exact pixel size of a text run at the given scale
pub fn measure(text: &str, scale: f32) -> Vec2 {
    Vec2::new(
        text.chars().count() as f32 * GLYPH_SIZE as f32 * scale,
        GLYPH_SIZE as f32 * scale,
    )
}
