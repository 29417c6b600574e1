use std::rc::Rc;
use yew::prelude::*;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::header::{SectionRef, SegmentHeader};
use crate::components::picture_box::PictureBox;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let demo_ref = use_node_ref();
    let contrast_ref = use_node_ref();

    // Document order matters: the header highlights the topmost section on ties.
    let sections = {
        let demo_ref = demo_ref.clone();
        let contrast_ref = contrast_ref.clone();
        use_state(move || {
            Rc::new(vec![
                SectionRef { label: "Demo", href: "#demo", node: demo_ref },
                SectionRef { label: "Contrast", href: "#contrast", node: contrast_ref },
            ])
        })
    };

    html! {
        <div class="landing-page">
            <SegmentHeader sections={(*sections).clone()} />
            <section id="demo" ref={demo_ref}>
                <Features />
            </section>
            <section id="contrast" ref={contrast_ref}>
                <PictureBox />
            </section>
            <Footer />
        </div>
    }
}
