use std::collections::VecDeque;
use std::io::BufReader;
use std::sync::Arc;
use rodio::{Source, decoder::DecoderError, Sink};
use rodio::dynamic_mixer::{DynamicMixerController, mixer};
use crate::error::AudioError;

type FileDecoder = rodio::Decoder<BufReader<std::fs::File>>;

/// A fully decoded clip; cloning it is cheap and every clone plays from the start
#[derive(Clone)]
pub struct SoundHandle(rodio::source::Buffered<FileDecoder>);

impl SoundHandle {
    pub fn from_file(file: std::fs::File) -> Result<Self, DecoderError> {
        let reader = BufReader::new(file);
        let decoder = rodio::Decoder::new(reader)?;
        Ok(Self(decoder.buffered()))
    }
}

pub struct SoundDriver {
    _stream: rodio::OutputStream,
    active_sounds: Vec<Option<rodio::Sink>>,
    free_list: VecDeque<usize>,
    _global_sink: Sink,
    global_mixer_controller: Arc<DynamicMixerController<f32>>
}
impl SoundDriver {
    pub fn try_create() -> Result<Self, AudioError> {
        let (_stream, handle) = rodio::OutputStream::try_default()?;
        let global_sink = rodio::Sink::try_new(&handle)?;
        let (global_mixer_controller, global_dynamic_mixer) =
            mixer(2, 44100);
        global_sink.append(global_dynamic_mixer);
        log::info!("Audio output opened");
        Ok(Self {
            _stream,
            active_sounds: Vec::new(),
            free_list: VecDeque::new(),
            _global_sink: global_sink,
            global_mixer_controller
        })
    }

    pub fn play_sound(&mut self, sound: SoundHandle) -> usize {
        let (sink, queue_rx) = Sink::new_idle();
        self.global_mixer_controller.add(queue_rx);
        sink.append(sound.0);
        let id = self.free_list
            .pop_back()
            .unwrap_or(self.active_sounds.len());
        if id < self.active_sounds.len() {
            self.active_sounds[id] = Some(sink);
        } else {
            self.active_sounds.push(Some(sink))
        }
        id
    }

    /// Frees the slots of sinks that finished playing, called once per frame
    pub fn maintain(&mut self) {
        for i in 0..self.active_sounds.len() {
            let should_free = match &(self.active_sounds[i]) {
                Some(sink) if sink.empty() => true,
                _ => false
            };
            if should_free {
                self.active_sounds[i] = None;
                self.free_list.push_back(i);
            }
        }
    }

    pub fn stop_all(&mut self) {
        for slot in self.active_sounds.iter_mut() {
            if let Some(sink) = slot.take() {
                sink.stop();
            }
        }
        self.free_list = (0..self.active_sounds.len()).collect();
    }
}

impl Drop for SoundDriver {
    fn drop(&mut self) {
        self.stop_all();
        log::info!("Audio output closed");
    }
}
