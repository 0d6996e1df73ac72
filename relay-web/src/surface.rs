use relay_ui::{ElementKind, StyleProperty, StyleValue, Surface, SurfaceError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// The browser DOM as a rendering surface
///
/// Elements are attached as direct children of `root`, which is `<body>`
/// unless the surface was mounted on a container.
pub struct DomSurface {
    document: Document,
    root: HtmlElement,
}

impl DomSurface {
    pub fn new(document: Document, root: HtmlElement) -> Self {
        Self { document, root }
    }

    /// Mount on `document.body`
    pub fn body() -> Result<Self, SurfaceError> {
        let document = document()?;
        let body = document
            .body()
            .ok_or_else(|| SurfaceError::new("document has no body"))?;
        Ok(Self::new(document, body))
    }

    /// Mount on the element with id `container_id`
    pub fn mount(container_id: &str) -> Result<Self, SurfaceError> {
        let document = document()?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| SurfaceError::new(format!("container `{container_id}` not found")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                SurfaceError::new(format!("container `{container_id}` is not an HTML element"))
            })?;
        Ok(Self::new(document, container))
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }
}

impl Surface for DomSurface {
    type Element = HtmlElement;

    fn create_element(&mut self, kind: &ElementKind) -> Result<HtmlElement, SurfaceError> {
        self.document
            .create_element(kind.as_str())
            .map_err(|err| js_error("createElement", err))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SurfaceError::new(format!("`{kind}` is not an HTML element")))
    }

    fn append_to_root(&mut self, element: &HtmlElement) -> Result<(), SurfaceError> {
        self.root
            .append_child(element)
            .map(|_| ())
            .map_err(|err| js_error("appendChild", err))
    }

    fn remove(&mut self, element: &HtmlElement) -> Result<(), SurfaceError> {
        element.remove();
        Ok(())
    }

    fn set_text(&mut self, element: &HtmlElement, text: &str) -> Result<(), SurfaceError> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn set_style(
        &mut self,
        element: &HtmlElement,
        property: StyleProperty,
        value: &StyleValue,
    ) -> Result<(), SurfaceError> {
        element
            .style()
            .set_property(property.css_name(), &value.to_string())
            .map_err(|err| js_error("setProperty", err))
    }
}

fn document() -> Result<Document, SurfaceError> {
    web_sys::window()
        .ok_or_else(|| SurfaceError::new("no window"))?
        .document()
        .ok_or_else(|| SurfaceError::new("no document"))
}

fn js_error(operation: &str, err: JsValue) -> SurfaceError {
    SurfaceError::new(format!("{operation} failed: {}", describe(&err)))
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
