use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub src: AttrValue,
    pub has_border: bool,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    html! {
        <img
            class={ classes!("avatar", p.has_border.then(|| "avatar-border")) }
            src={ p.src.clone() }
            alt=""
        />
    }
}
