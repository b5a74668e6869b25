use crate::core::constants::NOTE_COUNT;
use crate::core::{sample_name, SamplePlayer};
use fnv::FnvHashMap;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("no sample named {0}")]
    UnknownSample(String),
    #[error("audio element for {name}: {reason}")]
    Element { name: String, reason: String },
    #[error("playback of {name} rejected: {reason}")]
    Rejected { name: String, reason: String },
}

/// Static table of note samples keyed by file name (`0.mp3` .. `31.mp3`).
///
/// Each play creates a fresh `<audio>` element so rapid repeats overlap.
pub struct SampleBank {
    urls: FnvHashMap<String, String>,
}

impl SampleBank {
    pub fn new(sounds_base: &str) -> Self {
        let urls = (0..NOTE_COUNT)
            .map(|i| {
                let name = sample_name(i);
                let url = format!("{}{}", sounds_base, name);
                (name, url)
            })
            .collect();
        Self { urls }
    }

    fn start(&self, name: &str) -> Result<js_sys::Promise, PlaybackError> {
        let url = self
            .urls
            .get(name)
            .ok_or_else(|| PlaybackError::UnknownSample(name.to_string()))?;
        let element_err = |e: wasm_bindgen::JsValue| PlaybackError::Element {
            name: name.to_string(),
            reason: format!("{:?}", e),
        };
        let audio = web::HtmlAudioElement::new_with_src(url).map_err(element_err)?;
        audio.play().map_err(element_err)
    }
}

impl SamplePlayer for SampleBank {
    fn play(&mut self, sample: &str) {
        match self.start(sample) {
            Ok(promise) => {
                let name = sample.to_string();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        let err = PlaybackError::Rejected {
                            name,
                            reason: format!("{:?}", e),
                        };
                        log::error!("[audio] {}", err);
                    }
                });
            }
            Err(e) => log::error!("[audio] {}", e),
        }
    }
}
