//! Static project description.

use dioxus::prelude::*;
use wrm_chart_ui::theme;

/// (icon, accent colour, title, description)
const FEATURES: [(&str, &str, &str, &str); 4] = [
    (
        "💧",
        theme::PRIMARY,
        "Water Quality Monitoring",
        "Real-time monitoring of critical water quality parameters including pH, dissolved oxygen, turbidity, and harmful contaminants. The system provides immediate alerts when parameters exceed safe thresholds.",
    ),
    (
        "🧠",
        theme::SECONDARY,
        "AI-Powered Predictions",
        "Advanced machine learning algorithms analyze historical data and current conditions to predict water levels, quality trends, and potential supply issues up to 7 days in advance with high accuracy.",
    ),
    (
        "📊",
        theme::ACCENT,
        "Comprehensive Analytics",
        "Interactive dashboards visualize complex water data, making it accessible to both technical experts and non-technical stakeholders for informed decision-making.",
    ),
    (
        "🚀",
        "#10B981",
        "Scalable Architecture",
        "Built on modern web technologies with a scalable architecture that can grow from monitoring a few locations to managing entire regional water systems.",
    ),
];

const FRONT_END: [&str; 4] = [
    "Rust compiled to WebAssembly with Dioxus",
    "Responsive layout with plain CSS",
    "D3.js for interactive data visualization",
    "CSS keyframe animations for transitions",
];

const BACK_END: [&str; 4] = [
    "Python for data processing and ML models",
    "TensorFlow/PyTorch for predictive models",
    "Flask/FastAPI for RESTful services",
    "PostgreSQL for data storage",
];

const ML_APPROACHES: [&str; 4] = [
    "LSTM neural networks for time series forecasting of water levels and quality parameters",
    "Gradient boosting for anomaly detection to identify potential contamination or equipment failures",
    "Ensemble methods to combine multiple models and improve prediction accuracy",
    "Physics-informed neural networks that incorporate hydrological principles into machine learning models",
];

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "wrm-fade-in",
            style: "display: flex; flex-direction: column; gap: 32px;",

            div {
                class: "wrm-card",
                style: "display: flex; flex-wrap: wrap; gap: 24px;",
                div {
                    style: "flex: 3 1 320px;",
                    h2 { style: "margin: 0 0 16px 0; font-size: 24px; font-weight: 700;", "About This Project" }
                    p {
                        "This Water Resource Management AI project demonstrates how artificial intelligence and data science can address critical water management challenges in Africa. By combining real-time monitoring, predictive analytics, and AI-driven insights, the system provides a comprehensive solution for water management authorities."
                    }
                    p {
                        "The project was created as a submission for the ALX Software Engineering Programme Build your Portfolio project, showcasing technical skills, problem-solving abilities, and an ability to apply AI to solve real-world problems."
                    }
                }
                div {
                    style: "flex: 2 1 240px; min-height: 200px; border-radius: 8px; background: linear-gradient(135deg, {theme::PRIMARY} 0%, {theme::PRIMARY_LIGHT} 50%, {theme::SECONDARY_LIGHT} 100%);",
                }
            }

            div {
                h3 { style: "margin: 0 0 16px 0; font-size: 20px; font-weight: 600;", "Key Features" }
                div {
                    class: "wrm-grid-wide",
                    for (icon, color, title, description) in FEATURES {
                        div {
                            key: "{title}",
                            class: "wrm-card",
                            style: "display: flex;",
                            span {
                                style: "margin-right: 16px; padding: 12px; height: fit-content; border-radius: 8px; font-size: 20px; background: {color}1A;",
                                "{icon}"
                            }
                            div {
                                h4 { style: "margin: 0 0 8px 0; font-weight: 500;", "{title}" }
                                p { style: "margin: 0; font-size: 14px; color: #4B5563;", "{description}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "wrm-card",
                h3 { style: "margin: 0 0 16px 0; font-size: 20px; font-weight: 600;", "Technical Implementation" }
                p { "This project demonstrates the application of several technical skills and technologies:" }
                div {
                    class: "wrm-grid-wide",
                    TechList { title: "Front-End Technologies".to_string(), items: FRONT_END.to_vec() }
                    TechList { title: "Back-End Components (Described)".to_string(), items: BACK_END.to_vec() }
                }
                h4 { style: "margin: 24px 0 12px 0; font-weight: 500;", "Machine Learning Approaches" }
                p { style: "font-size: 14px;", "The predictive models in this system would combine several AI techniques:" }
                ul {
                    style: "font-size: 14px; padding-left: 20px;",
                    for approach in ML_APPROACHES {
                        li { key: "{approach}", style: "margin-bottom: 8px;", "{approach}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TechList(title: String, items: Vec<&'static str>) -> Element {
    rsx! {
        div {
            h4 { style: "margin: 0 0 12px 0; font-weight: 500;", "{title}" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; font-size: 14px;",
                for item in items {
                    li {
                        key: "{item}",
                        style: "display: flex; align-items: center; margin-bottom: 8px;",
                        span { style: "width: 6px; height: 6px; margin-right: 8px; border-radius: 9999px; background: {theme::PRIMARY};" }
                        "{item}"
                    }
                }
            }
        }
    }
}
