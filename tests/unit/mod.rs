mod group;
mod html;
