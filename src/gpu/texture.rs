//! GPU textures: sampled images and render attachments.

use crate::assets::decode::mip_chain;
use crate::assets::{ColorImage, HdrImage};

/// A texture and its default view.
pub struct GpuTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl GpuTexture {
    /// Upload an 8-bit sRGB image as `Rgba8UnormSrgb` with a full mip
    /// chain.
    #[must_use]
    pub fn from_color(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &ColorImage,
    ) -> Self {
        let chain = mip_chain(image);
        let levels: Vec<MipLevel<'_>> = std::iter::once(image)
            .chain(&chain)
            .map(|level| MipLevel {
                width: level.width,
                height: level.height,
                data: &level.rgba,
            })
            .collect();
        Self::sampled(device, queue, label, wgpu::TextureFormat::Rgba8UnormSrgb, 4, &levels)
    }

    /// Upload a linear HDR image as `Rgba16Float`.
    #[must_use]
    pub fn from_hdr(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &HdrImage,
    ) -> Self {
        let halves = hdr_to_f16_bits(&image.rgba);
        let level = MipLevel {
            width: image.width,
            height: image.height,
            data: bytemuck::cast_slice(&halves),
        };
        Self::sampled(device, queue, label, wgpu::TextureFormat::Rgba16Float, 8, &[level])
    }

    fn sampled(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        format: wgpu::TextureFormat,
        bytes_per_pixel: u32,
        levels: &[MipLevel<'_>],
    ) -> Self {
        let base = levels.first().map_or((1, 1), |l| (l.width, l.height));
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: base.0,
                height: base.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: levels.len().max(1) as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        for (mip_level, level) in (0u32..).zip(levels) {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level.data,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(level.width * bytes_per_pixel),
                    rows_per_image: Some(level.height),
                },
                wgpu::Extent3d {
                    width: level.width,
                    height: level.height,
                    depth_or_array_layers: 1,
                },
            );
        }
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    /// Create a render attachment (depth buffer or multisampled color
    /// target) of the given size. Zero dimensions are clamped to one.
    #[must_use]
    pub fn attachment(
        device: &wgpu::Device,
        label: &str,
        (width, height): (u32, u32),
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// One level of pixel data, tightly packed.
struct MipLevel<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

/// Convert linear RGBA floats to IEEE half-precision bit patterns,
/// saturating values beyond the `f16` range.
#[must_use]
pub fn hdr_to_f16_bits(rgba: &[f32]) -> Vec<u16> {
    rgba.iter()
        .map(|&v| half::f16::from_f32(v.clamp(-65504.0, 65504.0)).to_bits())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f16_conversion_keeps_hdr_range() {
        let bits = hdr_to_f16_bits(&[0.0, 1.0, 4.5, 1.0e6]);
        let back: Vec<f32> = bits.iter().map(|&b| half::f16::from_bits(b).to_f32()).collect();
        assert_eq!(back[0], 0.0);
        assert_eq!(back[1], 1.0);
        assert_eq!(back[2], 4.5);
        assert_eq!(back[3], 65504.0);
    }
}
