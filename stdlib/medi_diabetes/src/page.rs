//! The single HTML page and its two states.
//!
//! `AwaitingInput` shows the form only. `ResultDisplayed` shows the same
//! form, pre-filled with what was submitted, followed by the result row.
//! Submitting again always starts from a fresh evaluation.

use crate::assess::Assessment;
use crate::derive::{BmiStatus, DerivedFeatures};
use crate::gauge::Gauge;
use crate::inputs::{
    FamilyHistory, FieldSpec, InsulinCategory, RawInputs, AGE, BLOOD_PRESSURE,
    FAMILY_HISTORY_HELP, FAMILY_HISTORY_LABEL, GLUCOSE, HEIGHT, INSULIN_HELP, INSULIN_LABEL,
    PREGNANCIES, WEIGHT,
};

pub const TITLE: &str = "Diabetes Risk Predictor";

const STYLE: &str = r#"
body { background-color: #0F1116; color: #D1D5DB; font-family: sans-serif; margin: 0; padding: 2rem; }
h1, h2, h3 { color: #E5E7EB; }
h1 { font-weight: 700; }
h2, h3 { font-weight: 600; }
fieldset { border: 1px solid #374151; border-radius: 0.5rem; margin-bottom: 1rem; padding: 1rem; }
legend { color: #E5E7EB; font-weight: 600; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.results { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 2rem; text-align: center; }
label { display: block; color: #E5E7EB; margin-top: 0.75rem; }
.help { font-size: 0.8rem; color: #9CA3AF; }
input[type=number], select { color: #E5E7EB; background-color: #1F2937; border: 1px solid #374151; padding: 0.3rem; }
button { width: 100%; background-color: #0083B8; color: white; border: none; border-radius: 10px; padding: 0.5rem 1rem; margin-top: 2rem; font-weight: 500; }
button:hover { background-color: #2563EB; }
.alert { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 0.5rem 0; text-align: left; }
.alert-success { background-color: #14532d; color: #bbf7d0; }
.alert-warning { background-color: #713f12; color: #fef08a; }
.alert-error { background-color: #7f1d1d; color: #fecaca; }
.alert-info { background-color: #1e3a8a; color: #bfdbfe; }
.gauge-title, .gauge-tick { fill: #E5E7EB; font-size: 12px; }
.gauge-value { fill: #E5E7EB; font-size: 28px; font-weight: 700; }
"#;

const INSTRUCTIONS: &str = r#"<h3>How to Use This Tool</h3>
<ol>
<li>Fill in your basic information like age, weight, and height</li>
<li>If you have recent medical test results (blood sugar, blood pressure), enter them</li>
<li>If you don't have some medical values, you can use the default values provided</li>
<li>Click the 'Predict Diabetes Risk' button to see your results</li>
</ol>
<h3>Important Notes:</h3>
<ul>
<li>This tool is for educational purposes only and should not replace professional medical advice</li>
<li>All medical information you enter is processed locally and not stored anywhere</li>
<li>Default values are provided but using your actual values will give more accurate results</li>
</ul>"#;

const ABOUT_FEATURES: &str = r#"<details><summary>About the Features</summary>
<ul>
<li><b>Age</b>: Age in years</li>
<li><b>BMI</b>: Body Mass Index - weight in kg/(height in m)&sup2;</li>
<li><b>Glucose Level</b>: Fasting blood glucose level in mg/dL</li>
<li><b>Blood Pressure</b>: Systolic blood pressure in mm Hg</li>
<li><b>Insulin</b>: 2-Hour serum insulin (mu U/ml)</li>
<li><b>Skin Thickness</b>: Triceps skin fold thickness (mm)</li>
<li><b>Pregnancies</b>: Number of times pregnant</li>
<li><b>Diabetes Pedigree Function</b>: A function scoring likelihood of diabetes based on family history</li>
</ul>
</details>"#;

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    AwaitingInput {
        inputs: RawInputs,
        error: Option<String>,
    },
    ResultDisplayed {
        assessment: Assessment,
    },
}

impl Default for Page {
    fn default() -> Self {
        Page::AwaitingInput {
            inputs: RawInputs::default(),
            error: None,
        }
    }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_value(spec: &FieldSpec, value: f64) -> String {
    if spec.whole {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn number_input(spec: &FieldSpec, value: f64) -> String {
    let step = if spec.whole { "1" } else { "0.1" };
    format!(
        "<label for=\"{key}\">{label} ({unit})</label>\
         <input type=\"number\" id=\"{key}\" name=\"{key}\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\" required>\
         <div class=\"help\">{help}</div>",
        key = spec.key,
        label = escape(spec.label),
        unit = escape(spec.unit),
        min = spec.min,
        max = spec.max,
        value = format_value(spec, value),
        help = escape(spec.help),
    )
}

fn slider(spec: &FieldSpec, value: f64) -> String {
    format!(
        "<label for=\"{key}\">{label} ({unit})</label>\
         <input type=\"range\" id=\"{key}\" name=\"{key}\" min=\"{min}\" max=\"{max}\" step=\"1\" value=\"{value}\" \
         oninput=\"this.nextElementSibling.value=this.value\">\
         <output>{value}</output>\
         <div class=\"help\">{help}</div>",
        key = spec.key,
        label = escape(spec.label),
        unit = escape(spec.unit),
        min = spec.min,
        max = spec.max,
        value = format_value(spec, value),
        help = escape(spec.help),
    )
}

fn family_radios(selected: FamilyHistory) -> String {
    let mut html = format!("<label>{}</label>", escape(FAMILY_HISTORY_LABEL));
    for f in FamilyHistory::ALL {
        let checked = if f == selected { " checked" } else { "" };
        html.push_str(&format!(
            "<div><input type=\"radio\" id=\"family_{key}\" name=\"family_history\" value=\"{key}\"{checked}>\
             <label for=\"family_{key}\" style=\"display:inline\">{label}</label></div>",
            key = f.key(),
            label = escape(f.label()),
        ));
    }
    html.push_str(&format!("<div class=\"help\">{}</div>", escape(FAMILY_HISTORY_HELP)));
    html
}

fn insulin_select(selected: InsulinCategory) -> String {
    let mut html = format!(
        "<label for=\"insulin\">{}</label><select id=\"insulin\" name=\"insulin\">",
        escape(INSULIN_LABEL)
    );
    for c in InsulinCategory::ALL {
        let sel = if c == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{label}\"{sel}>{label}</option>",
            label = c.label()
        ));
    }
    html.push_str("</select>");
    html.push_str(&format!("<div class=\"help\">{}</div>", escape(INSULIN_HELP)));
    html
}

fn bmi_banner(derived: &DerivedFeatures) -> String {
    let status: BmiStatus = derived.bmi_status();
    format!(
        "<div class=\"alert {}\" id=\"bmi\">Your BMI is {:.1} - {}</div>",
        status.cue().css_class(),
        derived.bmi,
        status.label()
    )
}

fn form(inputs: &RawInputs) -> String {
    let derived = DerivedFeatures::from_inputs(inputs);
    let mut html = String::from("<form method=\"post\" action=\"/predict\">");

    html.push_str("<fieldset><legend>Basic Information</legend><div class=\"columns\"><div>");
    html.push_str(&number_input(&AGE, inputs.age().into()));
    html.push_str(&number_input(&WEIGHT, inputs.weight_kg()));
    html.push_str("</div><div>");
    html.push_str(&number_input(&HEIGHT, inputs.height_cm()));
    html.push_str(&family_radios(inputs.family_history()));
    html.push_str("</div></div>");
    html.push_str(&bmi_banner(&derived));
    html.push_str("</fieldset>");

    html.push_str("<fieldset><legend>Medical Details (Optional)</legend>");
    html.push_str(
        "<div class=\"alert alert-info\">If you don't have these values from recent medical tests, \
         you can leave them at default values</div>",
    );
    html.push_str("<div class=\"columns\"><div>");
    html.push_str(&slider(&GLUCOSE, inputs.glucose().into()));
    html.push_str(&slider(&BLOOD_PRESSURE, inputs.blood_pressure().into()));
    html.push_str("</div><div>");
    html.push_str(&insulin_select(inputs.insulin()));
    html.push_str(&number_input(&PREGNANCIES, inputs.pregnancies().into()));
    html.push_str("</div></div></fieldset>");

    html.push_str("<button type=\"submit\">Predict Diabetes Risk</button></form>");
    html
}

fn results(assessment: &Assessment) -> String {
    let tier = assessment.result.risk_tier;
    let items: String = tier
        .recommendations()
        .iter()
        .map(|r| format!("<li>{}</li>", escape(r)))
        .collect();
    format!(
        "<hr><h2>Your Results</h2><div class=\"results\" id=\"results\">\
         <div>{gauge}</div>\
         <div><h3>Risk Level</h3><h2 style=\"color: {color};\">{label}</h2></div>\
         <div><h3>Recommendations</h3><div class=\"alert {cue}\"><ul>{items}</ul></div></div>\
         </div>",
        gauge = Gauge::new(assessment.result.risk_percentage).to_svg(),
        color = tier.color(),
        label = tier.label(),
        cue = tier.cue().css_class(),
    )
}

impl Page {
    pub fn inputs(&self) -> &RawInputs {
        match self {
            Page::AwaitingInput { inputs, .. } => inputs,
            Page::ResultDisplayed { assessment } => &assessment.inputs,
        }
    }

    pub fn render(&self) -> String {
        let mut body = format!("<h1>{TITLE}</h1>{INSTRUCTIONS}");
        if let Page::AwaitingInput {
            error: Some(err), ..
        } = self
        {
            body.push_str(&format!(
                "<div class=\"alert alert-error\" id=\"error\">{}</div>",
                escape(err)
            ));
        }
        body.push_str(&form(self.inputs()));
        if let Page::ResultDisplayed { assessment } = self {
            body.push_str(&results(assessment));
        }
        body.push_str(ABOUT_FEATURES);
        body.push_str("<hr><p>Made with care by Your Healthcare Team</p>");

        format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>{TITLE}</title><style>{STYLE}</style></head><body>{body}</body></html>"
        )
    }
}
