use dioxus::prelude::*;

use crate::routes::Route;

/// Static description of the system, shown to signed-in operators.
#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "about-page",
            div { class: "about-container",
                h1 { class: "about-title", "About the Traffic Management System" }

                p { class: "about-intro",
                    "An intelligent traffic control console that prioritizes emergency vehicles "
                    "at road intersections using computer vision and live signal control."
                }

                div { class: "about-section",
                    h2 { "Problem Statement" }
                    p {
                        "Fixed-cycle traffic signals do not adapt to emergencies. Ambulances get "
                        "stuck at red lights, and every minute of delay matters."
                    }
                }

                div { class: "about-section",
                    h2 { "How It Works" }
                    ul {
                        li { "Junction cameras provide live or recorded video" }
                        li { "A detection model recognises emergency vehicles in the footage" }
                        li { "The backend turns detections into signal changes" }
                        li { "Ambulances register their route ahead of time" }
                        li { "Signals along the route switch to green for the ambulance's lane" }
                    }
                }

                div { class: "about-section",
                    h2 { "Key Features" }
                    ul {
                        li { "Emergency vehicle detection from junction video" }
                        li { "Dynamic signal switching with a yellow transition" }
                        li { "Admin override panel" }
                        li { "Live signal monitoring across all junctions" }
                        li { "Ambulance self-service route declaration" }
                    }
                }

                div { class: "about-section",
                    h2 { "Academic Purpose" }
                    p {
                        "Built as a simulation to demonstrate computer vision in smart-city "
                        "traffic management."
                    }
                }

                div { class: "about-footer",
                    Link { to: Route::ControlCenter {}, class: "auth-link", "Back to the Control Center" }
                }
            }
        }
    }
}
