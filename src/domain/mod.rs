pub mod markdowns;
