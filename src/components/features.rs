use yew::prelude::*;
use crate::config;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <div class="features">
            <div class="features-header">
                <h2>{"Discover our latest Model features"}</h2>
            </div>

            <div class="features-video">
                <video
                    src={config::asset_url("feature.mp4")}
                    playsinline=true
                    draggable="true"
                    controls=true
                />
            </div>
            <style>
                {r#"
                .features {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin: 1.25rem;
                    padding: 3rem 1rem;
                }
                .features-header {
                    text-align: center;
                }
                .features-header h2 {
                    max-width: 56rem;
                    margin: 20px auto 0;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #0f172a;
                }
                .features-video {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                    width: 100%;
                    max-width: 792px;
                    margin: 0 auto 2.5rem;
                    border-radius: 1.5rem;
                    background: #000;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                }
                .features-video video {
                    width: 100%;
                    height: 100%;
                    outline: none;
                }
                @media (min-width: 640px) {
                    .features-header h2 {
                        font-size: 3.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
