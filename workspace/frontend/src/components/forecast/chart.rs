use common::ChartSeries;
use plotly::common::{Line, Marker, Mode};
use plotly::Scatter;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_DIV_ID: &str = "forecast-chart";
const LINE_COLOR: &str = "rgba(0, 150, 136, 1)";
const DOT_STROKE: &str = "#00796b";

/// Plotly wants plain JS objects, not the `Map`s serde-wasm-bindgen would produce
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn plot(div_id: &str, series: &ChartSeries) -> Result<(), String> {
    let trace = Scatter::new(series.labels.clone(), series.values.clone())
        .mode(Mode::LinesMarkers)
        .name("kWh")
        .line(Line::new().color(LINE_COLOR).width(2.0))
        .marker(
            Marker::new()
                .size(8)
                .color(LINE_COLOR)
                .line(Line::new().color(DOT_STROKE).width(2.0)),
        );

    let layout = serde_json::json!({
        "height": 220,
        "showlegend": false,
        "margin": {"t": 16, "r": 16, "l": 64, "b": 32},
        "paper_bgcolor": "#ffffff",
        "plot_bgcolor": "#e0f7fa",
        "xaxis": {"type": "category", "showgrid": false},
        "yaxis": {"ticksuffix": "kWh", "tickformat": ".2f", "gridcolor": "#ffffff"}
    });
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    let data = js_sys::Array::new();
    data.push(&to_js(&trace)?);

    newPlot(div_id, data.into(), to_js(&layout)?, to_js(&config)?);
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: ChartSeries,
}

/// Hourly consumption line chart. An empty series draws blank axes.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.series.clone()), move |(container_ref, series)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);
            log::trace!("Plotting {} forecast points", series.len());
            if let Err(e) = plot(CHART_DIV_ID, series) {
                log::error!("Failed to render forecast chart: {}", e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} class="chart" style="width:100%; height:220px;"></div>
    }
}
