use js_sys::JSON;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use folio_content_core::{ContentRecord, Project};
use folio_interaction_core::{
    hero::ENTRANCE_DELAYS, resolve_project, CarouselId, CarouselOptions, Config, ContactField,
    FallbackView, HeroParallax, Inputs, Outputs, ProjectView, RelayError, RevealId, RevealMargin,
    Route, Stage, StaggerPreset, TiltId, TiltPreset,
};

#[wasm_bindgen]
pub struct FolioStage {
    core: Stage,
    content: Option<ContentRecord>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Accepts either a JSON string or a plain JS object.
fn parse_content(value: JsValue) -> Result<ContentRecord, JsError> {
    let text = match value.as_string() {
        Some(s) => s,
        None => JSON::stringify(&value)
            .map_err(|e| JsError::new(&format!("content stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("content: stringify produced non-string"))?,
    };
    ContentRecord::from_json(&text).map_err(|e| JsError::new(&format!("content error: {e}")))
}

fn parse_field(field: &str) -> Result<ContactField, JsError> {
    serde_json::from_value(serde_json::Value::String(field.to_string()))
        .map_err(|_| JsError::new(&format!("unknown contact field '{field}'")))
}

#[derive(Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
enum ProjectViewJs<'a> {
    Detail {
        project: &'a Project,
        gallery: Vec<String>,
        alts: Vec<String>,
        selected: usize,
        options: CarouselOptions,
    },
    NotFound {
        fallback: FallbackView,
    },
}

#[wasm_bindgen]
impl FolioStage {
    /// Create a stage. `config` is partial JSON or undefined/null for defaults;
    /// `content` is the site record (object or JSON string) or undefined/null.
    /// Example:
    ///   new FolioStage({ relay: { service_id, template_id, public_key } }, content)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, content: JsValue) -> Result<FolioStage, JsError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let content = if jsvalue_is_undefined_or_null(&content) {
            None
        } else {
            Some(parse_content(content)?)
        };

        let core = match &content {
            Some(record) => Stage::for_landing(cfg, record),
            None => Stage::new(cfg),
        };
        Ok(FolioStage { core, content })
    }

    /// Mount a reveal controller. `margin_px` overrides the configured margin.
    #[wasm_bindgen(js_name = add_reveal)]
    pub fn add_reveal(&mut self, margin_px: Option<f32>) -> u32 {
        self.core.add_reveal(margin_px.map(RevealMargin::new)).0
    }

    /// Mount a tilt controller. `preset` is "portrait" or "project_card".
    #[wasm_bindgen(js_name = add_tilt)]
    pub fn add_tilt(&mut self, preset: JsValue) -> Result<u32, JsError> {
        let preset: TiltPreset =
            swb::from_value(preset).map_err(|e| JsError::new(&format!("tilt preset error: {e}")))?;
        Ok(self.core.add_tilt(preset).0)
    }

    #[wasm_bindgen(js_name = add_carousel)]
    pub fn add_carousel(&mut self, slide_count: usize, looping: bool) -> u32 {
        self.core.add_carousel(slide_count, looping).0
    }

    #[wasm_bindgen(js_name = remove_reveal)]
    pub fn remove_reveal(&mut self, id: u32) -> Result<(), JsError> {
        self.core
            .remove_reveal(RevealId(id))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = remove_tilt)]
    pub fn remove_tilt(&mut self, id: u32) -> Result<(), JsError> {
        self.core
            .remove_tilt(TiltId(id))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Unmount a carousel. Settle events that arrive afterwards are ignored.
    #[wasm_bindgen(js_name = remove_carousel)]
    pub fn remove_carousel(&mut self, id: u32) -> Result<(), JsError> {
        self.core
            .remove_carousel(CarouselId(id))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Step the stage by dt (seconds) with inputs JSON. Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(dt, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    #[wasm_bindgen(js_name = edit_contact)]
    pub fn edit_contact(&mut self, field: &str, value: String) -> Result<(), JsError> {
        let field = parse_field(field)?;
        self.core.edit_contact(field, value);
        Ok(())
    }

    /// Validate the form and lock it. Returns the relay request for the host
    /// to send; report the outcome with `finish_submit`.
    #[wasm_bindgen(js_name = begin_submit)]
    pub fn begin_submit(&mut self) -> Result<JsValue, JsError> {
        let request = self
            .core
            .begin_submit()
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&request).map_err(|e| JsError::new(&format!("request error: {e}")))
    }

    /// `error` is null/undefined on success, otherwise the relay's message.
    #[wasm_bindgen(js_name = finish_submit)]
    pub fn finish_submit(&mut self, error: Option<String>) -> Result<(), JsError> {
        let outcome = match error {
            None => Ok(()),
            Some(msg) => Err(RelayError::Transport(msg)),
        };
        self.core
            .finish_submit(outcome)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = submit_label)]
    pub fn submit_label(&self) -> String {
        self.core.contact().submit_label().to_string()
    }

    #[wasm_bindgen(js_name = submit_enabled)]
    pub fn submit_enabled(&self) -> bool {
        self.core.contact().submit_enabled()
    }

    /// Copy `email`, or the content record's address when omitted.
    #[wasm_bindgen(js_name = copy_email)]
    pub fn copy_email(&mut self, email: Option<String>) -> Result<(), JsError> {
        let email = match email {
            Some(e) => e,
            None => self
                .content
                .as_ref()
                .map(|c| c.personal.email.clone())
                .ok_or_else(|| JsError::new("copy_email: no address and no content loaded"))?,
        };
        self.core.copy_email(&email);
        Ok(())
    }

    #[wasm_bindgen(js_name = copy_indicator)]
    pub fn copy_indicator(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.copy_indicator())
            .map_err(|e| JsError::new(&format!("indicator error: {e}")))
    }

    #[wasm_bindgen(js_name = toggle_menu)]
    pub fn toggle_menu(&mut self) -> bool {
        self.core.toggle_menu()
    }

    #[wasm_bindgen(js_name = menu_label)]
    pub fn menu_label(&self) -> String {
        self.core.nav().menu_label().to_string()
    }

    /// Follow a nav link. Returns the scroll command, or null for an anchor
    /// that is not on the page.
    #[wasm_bindgen]
    pub fn navigate(&mut self, href: &str) -> Result<JsValue, JsError> {
        match self.core.navigate(href) {
            Some(cmd) => swb::to_value(&cmd).map_err(|e| JsError::new(&format!("nav error: {e}"))),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = scroll_to_top)]
    pub fn scroll_to_top(&mut self) {
        self.core.scroll_to_top();
    }

    /// Parallax frame for a hero box at `top` with `height` (client space).
    #[wasm_bindgen(js_name = hero_frame)]
    pub fn hero_frame(&self, top: f32, height: f32) -> Result<JsValue, JsError> {
        let frame = self.core.hero_frame(HeroParallax::progress(top, height));
        swb::to_value(&frame).map_err(|e| JsError::new(&format!("hero error: {e}")))
    }

    /// Keyframe for the `index`-th child of a staggered section. `preset` is
    /// one of "projects", "achievements", "experience", "experience_dot", "nav".
    #[wasm_bindgen(js_name = reveal_keyframe)]
    pub fn reveal_keyframe(
        &self,
        reveal_id: u32,
        index: usize,
        preset: JsValue,
    ) -> Result<JsValue, JsError> {
        let preset: StaggerPreset = swb::from_value(preset)
            .map_err(|e| JsError::new(&format!("stagger preset error: {e}")))?;
        let frame = self
            .core
            .reveal_keyframe(RevealId(reveal_id), index, preset)
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&frame).map_err(|e| JsError::new(&format!("keyframe error: {e}")))
    }

    /// Keyframe for skill `skill` of category `category` in the skills grid.
    #[wasm_bindgen(js_name = skill_keyframe)]
    pub fn skill_keyframe(
        &self,
        reveal_id: u32,
        category: usize,
        skill: usize,
    ) -> Result<JsValue, JsError> {
        let frame = self
            .core
            .skill_keyframe(RevealId(reveal_id), category, skill)
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&frame).map_err(|e| JsError::new(&format!("keyframe error: {e}")))
    }

    /// Bar width in percent: `level` once the grid is revealed, 0 before.
    #[wasm_bindgen(js_name = skill_bar_width)]
    pub fn skill_bar_width(&self, reveal_id: u32, level: u8) -> Result<f32, JsError> {
        self.core
            .skill_bar_width(RevealId(reveal_id), level)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Landing sections with icon glyph names and timeline sides resolved.
    #[wasm_bindgen(js_name = landing_view)]
    pub fn landing_view(&self) -> Result<JsValue, JsError> {
        let content = self
            .content
            .as_ref()
            .ok_or_else(|| JsError::new("landing_view: no content loaded"))?;
        swb::to_value(&content.landing_view())
            .map_err(|e| JsError::new(&format!("landing view error: {e}")))
    }

    /// Resolve the detail view for `slug`. Mount a carousel with
    /// `add_carousel(gallery.length, options.loop)` to track it.
    #[wasm_bindgen(js_name = resolve_project)]
    pub fn resolve_project(&self, slug: &str) -> Result<JsValue, JsError> {
        let content = self
            .content
            .as_ref()
            .ok_or_else(|| JsError::new("resolve_project: no content loaded"))?;
        let view = match resolve_project(content, slug) {
            ProjectView::Detail(page) => ProjectViewJs::Detail {
                alts: (0..page.gallery.len()).map(|i| page.slide_alt(i)).collect(),
                selected: page.carousel.selected_index(),
                project: page.project,
                gallery: page.gallery,
                options: page.options,
            },
            ProjectView::NotFound(fallback) => ProjectViewJs::NotFound { fallback },
        };
        swb::to_value(&view).map_err(|e| JsError::new(&format!("view error: {e}")))
    }

    /// Head tags for the landing page, in render order.
    #[wasm_bindgen(js_name = meta_tags)]
    pub fn meta_tags(&self) -> Result<JsValue, JsError> {
        let content = self
            .content
            .as_ref()
            .ok_or_else(|| JsError::new("meta_tags: no content loaded"))?;
        swb::to_value(&content.seo.meta_tags())
            .map_err(|e| JsError::new(&format!("meta error: {e}")))
    }
}

/// Parse a location path into a route.
#[wasm_bindgen]
pub fn route(path: &str) -> Result<JsValue, JsError> {
    swb::to_value(&Route::parse(path)).map_err(|e| JsError::new(&format!("route error: {e}")))
}

/// Entrance delays, in seconds, for the hero's elements in display order.
#[wasm_bindgen]
pub fn hero_entrance_delays() -> Vec<f32> {
    ENTRANCE_DELAYS.to_vec()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
