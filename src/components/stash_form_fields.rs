//! Stash Form Fields
//!
//! Inputs shared by the create form and the edit modal, including the
//! "My Position" capture.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::forms::{Field, FormKind, StashForm};
use crate::view_model::PanelLabels;

/// Text or number input bound to one field of a form
#[component]
fn FormInput(
    form: RwSignal<StashForm>,
    kind: FormKind,
    field: Field,
    #[prop(optional)] label: Option<fn(&PanelLabels) -> String>,
    #[prop(optional)] placeholder: Option<fn(&PanelLabels) -> String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = kind.dom_id(field);

    view! {
        <div class="form-group">
            {label.map(|text| view! {
                <label for=id.clone()>{move || ctx.labels.with(text)}</label>
            })}
            <input
                type=input_type
                id=id.clone()
                step=step
                placeholder=move || {
                    placeholder
                        .filter(|_| kind.shows_placeholders())
                        .map(|text| ctx.labels.with(text))
                }
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *f.field_mut(field) = value);
                }
            />
        </div>
    }
}

/// All fields of a stash form
#[component]
pub fn StashFormFields(form: RwSignal<StashForm>, kind: FormKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let capture_position = move |_| {
        let bridge = ctx.bridge();
        spawn_local(async move {
            match commands::get_player_coords(&bridge).await {
                Ok(position) => form.update(|f| f.apply_position(position)),
                Err(e) => ctx.report_failure(&e),
            }
        });
    };

    let debug_id = format!("{}_debug", match kind {
        FormKind::Create => "create",
        FormKind::Edit => "edit",
    });

    view! {
        {match kind {
            FormKind::Create => view! {
                <FormInput form=form kind=kind field=Field::StashId
                    label=|l: &PanelLabels| l.stash_id.clone()
                    placeholder=|l: &PanelLabels| l.stash_id_placeholder.clone() />
            }.into_any(),
            // the id is the key of the record being edited
            FormKind::Edit => view! {
                <input
                    type="hidden"
                    id=kind.dom_id(Field::StashId)
                    prop:value=move || form.with(|f| f.stash_id.clone())
                />
            }.into_any(),
        }}

        <FormInput form=form kind=kind field=Field::Label
            label=|l: &PanelLabels| l.label.clone()
            placeholder=|l: &PanelLabels| l.label_placeholder.clone() />

        <div class="form-row">
            <FormInput form=form kind=kind field=Field::Slots input_type="number"
                label=|l: &PanelLabels| l.slots.clone() />
            <FormInput form=form kind=kind field=Field::Weight input_type="number"
                label=|l: &PanelLabels| l.weight.clone() />
        </div>

        <div class="form-row">
            <FormInput form=form kind=kind field=Field::Code
                label=|l: &PanelLabels| l.code.clone()
                placeholder=|l: &PanelLabels| l.code_placeholder.clone() />
            <FormInput form=form kind=kind field=Field::Rotation input_type="number" step="any"
                label=|l: &PanelLabels| l.rotation.clone() />
        </div>

        <div class="coords-section">
            <h3>
                {move || ctx.labels.with(|l| l.coordinates.clone())}
                " "
                <button type="button" class="btn-small" on:click=capture_position>
                    <i class="fas fa-crosshairs"></i>
                    " "
                    {move || ctx.labels.with(|l| l.my_position.clone())}
                </button>
            </h3>
            <div class="form-row three">
                <FormInput form=form kind=kind field=Field::CoordX input_type="number" step="any" />
                <FormInput form=form kind=kind field=Field::CoordY input_type="number" step="any" />
                <FormInput form=form kind=kind field=Field::CoordZ input_type="number" step="any" />
            </div>
        </div>

        <div class="coords-section">
            <h3>{move || ctx.labels.with(|l| l.zone_size.clone())}</h3>
            <div class="form-row three">
                <FormInput form=form kind=kind field=Field::SizeX input_type="number" step="any" />
                <FormInput form=form kind=kind field=Field::SizeY input_type="number" step="any" />
                <FormInput form=form kind=kind field=Field::SizeZ input_type="number" step="any" />
            </div>
        </div>

        <div class="form-group checkbox">
            <input
                type="checkbox"
                id=debug_id.clone()
                prop:checked=move || form.with(|f| f.debug)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| f.debug = checked);
                }
            />
            <label for=debug_id>{move || ctx.labels.with(|l| l.debug_mode.clone())}</label>
        </div>
    }
}
