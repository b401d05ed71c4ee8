use super::core::{Msg, INSTRUCTION_TEXT};
use super::main::ClassifierWindow;

impl ClassifierWindow {
    /// Returns the texture for the current thumbnail, uploading it when a
    /// newer one has been published.
    fn thumbnail_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        let thumbnail = self.model.thumbnail.as_ref()?;
        let generation = self.model.thumbnail_generation;

        if let Some((loaded, texture)) = &self.texture {
            if *loaded == generation {
                return Some(texture.clone());
            }
        }

        let image = egui::ColorImage::from_rgba_unmultiplied(thumbnail.size, &thumbnail.rgba);
        let texture = ctx.load_texture("thumbnail", image, egui::TextureOptions::LINEAR);
        self.texture = Some((generation, texture.clone()));
        Some(texture)
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let texture = self.thumbnail_texture(ctx);
        let mut msgs = Vec::new();
        let mut focused_once = self.focused_once;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(INSTRUCTION_TEXT);

                ui.horizontal(|ui| {
                    let mut path_input = self.model.path_input.clone();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut path_input)
                            .desired_width(480.0)
                            .hint_text("/absolute/path/to/image.jpg"),
                    );
                    // Path entry takes keyboard focus on the first frame.
                    if !focused_once {
                        response.request_focus();
                        focused_once = true;
                    }
                    if response.changed() {
                        msgs.push(Msg::PathChanged(path_input));
                    }

                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Classify").clicked() || submitted {
                        msgs.push(Msg::ClassifyClicked);
                    }
                });

                if let Some(texture) = &texture {
                    ui.image(texture);
                }

                ui.label(self.model.result_message.as_str());
                ui.label(self.model.status_message.as_str());
            });
        });

        self.focused_once = focused_once;

        for msg in msgs {
            self.dispatch(msg);
        }
    }
}

impl eframe::App for ClassifierWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

pub fn native_options(window_title: &str, window_size: [f32; 2]) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title)
            .with_inner_size(window_size),
        ..Default::default()
    }
}
