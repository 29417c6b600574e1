use yew::prelude::*;
use crate::config;

/// Most comparison cards the grid shows.
pub const MAX_VISIBLE_ITEMS: usize = 9;

#[derive(Clone, PartialEq, Debug)]
pub struct ShowcaseItem {
    pub original: &'static str,
    pub modified: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const SHOWCASE: &[ShowcaseItem] = &[
    ShowcaseItem {
        original: "PictureBox/17.jpg",
        modified: "PictureBox/17-after.png",
        title: "Salient Object Detection",
        desc: "Instantly identify and isolate the most important objects in your images. Our advanced algorithms pinpoint the key elements, making it easy to focus on what matters most.",
    },
    ShowcaseItem {
        original: "PictureBox/4.jpg",
        modified: "PictureBox/4-after.png",
        title: "Camouflage Object Detection",
        desc: "Unmask the hidden! Our technology effortlessly detects objects cleverly concealed within complex backgrounds, revealing what others might miss.",
    },
    ShowcaseItem {
        original: "PictureBox/11.jpg",
        modified: "PictureBox/11-after.png",
        title: "Meticulous Object Detection",
        desc: "Experience precision like never before. Our object detection system pinpoints even the smallest details, ensuring every element is accurately identified and separated.",
    },
];

pub fn visible_items(items: &[ShowcaseItem]) -> &[ShowcaseItem] {
    &items[..items.len().min(MAX_VISIBLE_ITEMS)]
}

#[derive(Properties, PartialEq)]
pub struct ComparisonCardProps {
    pub item: ShowcaseItem,
}

/// Shows the original image and swaps to the processed one while hovered or
/// after a tap.
#[function_component(ComparisonCard)]
pub fn comparison_card(props: &ComparisonCardProps) -> Html {
    let show_modified = use_state(|| false);

    let on_enter = {
        let show_modified = show_modified.clone();
        Callback::from(move |_: MouseEvent| show_modified.set(true))
    };
    let on_leave = {
        let show_modified = show_modified.clone();
        Callback::from(move |_: MouseEvent| show_modified.set(false))
    };
    let on_tap = {
        let show_modified = show_modified.clone();
        Callback::from(move |_: MouseEvent| show_modified.set(!*show_modified))
    };

    let item = &props.item;
    let src = if *show_modified { item.modified } else { item.original };

    html! {
        <div class="comparison-card">
            <div class="comparison-image" onmouseenter={on_enter} onmouseleave={on_leave} onclick={on_tap}>
                <img src={config::asset_url(src)} alt={item.title} loading="lazy" />
            </div>
            <h3>{item.title}</h3>
            <p>{item.desc}</p>
        </div>
    }
}

#[function_component(PictureBox)]
pub fn picture_box() -> Html {
    html! {
        <div class="picture-box">
            <h2>{"Explore More Product Features"}</h2>
            <div class="picture-grid">
                {
                    visible_items(SHOWCASE).iter().enumerate().map(|(index, item)| html! {
                        <ComparisonCard key={index} item={item.clone()} />
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .picture-box {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .picture-box h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    text-align: center;
                }
                .picture-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1rem;
                    width: 80%;
                    margin: 0 auto;
                }
                .comparison-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .comparison-image {
                    width: 100%;
                    cursor: pointer;
                }
                .comparison-image img {
                    width: 100%;
                    border-radius: 10px;
                    display: block;
                }
                .comparison-card h3 {
                    margin-top: 0.5rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                }
                .comparison-card p {
                    color: #4b5563;
                }
                @media (max-width: 640px) {
                    .picture-grid {
                        grid-template-columns: 1fr;
                        width: 100%;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &'static str) -> ShowcaseItem {
        ShowcaseItem {
            original: "a.jpg",
            modified: "a-after.png",
            title,
            desc: "",
        }
    }

    #[test]
    fn grid_is_capped_at_nine_items() {
        let items: Vec<ShowcaseItem> = (0..12).map(|_| item("card")).collect();
        assert_eq!(visible_items(&items).len(), MAX_VISIBLE_ITEMS);
    }

    #[test]
    fn short_lists_are_shown_whole() {
        assert_eq!(visible_items(SHOWCASE).len(), SHOWCASE.len());
        assert!(visible_items(&[]).is_empty());
    }

    #[test]
    fn showcase_pairs_processed_images() {
        for entry in SHOWCASE {
            assert_ne!(entry.original, entry.modified);
            assert!(!entry.title.is_empty());
        }
    }
}
