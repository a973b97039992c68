//! Artwork generation: one request per image, each with its own seed.

use bon::Builder;
use tracing::{debug, info, warn};

use crate::error::{EaselError, Result};
use crate::history::HistoryEntry;
use crate::provider::{InferenceBackend, TextToImageRequest};
use crate::session::ImageSession;
use crate::styles;
use crate::types::{GeneratedImage, GenerationParams, ImageGeneration};

/// Accepted width/height values.
pub const DIMENSIONS: [u32; 2] = [512, 768];
pub const GUIDANCE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=20.0;
pub const STEPS_RANGE: std::ops::RangeInclusive<u32> = 10..=150;
pub const COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=4;

/// What the user asked for in one "generate" action.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ArtworkRequest {
    #[builder(into)]
    pub base_prompt: String,
    #[builder(into, default = styles::default_style().to_string())]
    pub style: String,
    #[builder(into)]
    pub negative_prompt: Option<String>,
    #[builder(default = 7.5)]
    pub guidance_scale: f64,
    #[builder(default = 50)]
    pub steps: u32,
    #[builder(default = 1)]
    pub count: u32,
    #[builder(default = 512)]
    pub width: u32,
    #[builder(default = 512)]
    pub height: u32,
    /// Seed of the first image; following images use `seed + i`.
    /// Random per image when unset.
    pub seed: Option<u64>,
}

impl ArtworkRequest {
    /// Check ranges and resolve the style to its catalog spelling.
    pub fn validate(&self) -> Result<&'static str> {
        if self.base_prompt.trim().is_empty() {
            return Err(EaselError::InvalidArgument("Please enter a base prompt".into()));
        }
        let (_, style) = styles::find_style(&self.style)
            .ok_or_else(|| EaselError::UnknownStyle(self.style.clone()))?;
        if !GUIDANCE_RANGE.contains(&self.guidance_scale) {
            return Err(EaselError::InvalidArgument(format!(
                "guidance scale {} outside 1.0..=20.0",
                self.guidance_scale
            )));
        }
        if !STEPS_RANGE.contains(&self.steps) {
            return Err(EaselError::InvalidArgument(format!(
                "steps {} outside 10..=150",
                self.steps
            )));
        }
        if !COUNT_RANGE.contains(&self.count) {
            return Err(EaselError::InvalidArgument(format!(
                "image count {} outside 1..=4",
                self.count
            )));
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !DIMENSIONS.contains(&value) {
                return Err(EaselError::InvalidArgument(format!(
                    "{name} must be 512 or 768, got {value}"
                )));
            }
        }
        Ok(style)
    }

    fn effective_negative_prompt(&self) -> Option<String> {
        self.negative_prompt
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }

    fn seed_for(&self, index: u32) -> u64 {
        match self.seed {
            Some(base) => base.wrapping_add(u64::from(index)),
            None => u64::from(rand::random::<u32>()),
        }
    }
}

/// Reported before each image request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkProgress {
    /// 1-based index of the image about to be generated.
    pub index: u32,
    pub total: u32,
}

impl ArtworkProgress {
    pub fn fraction(&self) -> f64 {
        f64::from(self.index) / f64::from(self.total.max(1))
    }
}

/// Generate every image of `request` and append the batch to `session`.
///
/// Images are requested one after another. If any request fails, nothing is
/// recorded and the error carries the 1-based index of the failed artwork.
pub async fn generate_artwork<'s, F>(
    backend: &dyn InferenceBackend,
    model: &str,
    request: &ArtworkRequest,
    session: &'s mut ImageSession,
    mut on_progress: F,
) -> Result<&'s HistoryEntry<ImageGeneration>>
where
    F: FnMut(ArtworkProgress),
{
    let style = request.validate()?;
    let full_prompt = styles::compose_prompt(&request.base_prompt, style);
    let negative_prompt = request.effective_negative_prompt();

    let mut images = Vec::with_capacity(request.count as usize);
    for i in 0..request.count {
        on_progress(ArtworkProgress {
            index: i + 1,
            total: request.count,
        });

        let seed = request.seed_for(i);
        let call = TextToImageRequest {
            model: model.to_string(),
            prompt: full_prompt.clone(),
            negative_prompt: negative_prompt.clone(),
            guidance_scale: request.guidance_scale,
            num_inference_steps: request.steps,
            width: request.width,
            height: request.height,
            seed,
        };

        debug!(index = i + 1, total = request.count, seed, "generating artwork");
        let data = backend.text_to_image(&call).await.map_err(|e| {
            warn!(index = i + 1, error = %e, "artwork generation failed");
            EaselError::Artwork {
                index: i as usize + 1,
                source: Box::new(e),
            }
        })?;
        images.push(GeneratedImage::new(data, seed));
    }

    let seeds = images.iter().map(|image| image.seed).collect();
    let generation = ImageGeneration {
        base_prompt: request.base_prompt.trim().to_string(),
        style: style.to_string(),
        full_prompt,
        negative_prompt,
        images,
        params: GenerationParams {
            guidance_scale: request.guidance_scale,
            steps: request.steps,
            width: request.width,
            height: request.height,
            seeds,
        },
    };

    info!(
        style,
        images = generation.images.len(),
        size = %generation.params.size(),
        "artwork generated"
    );
    Ok(session.record(generation))
}
