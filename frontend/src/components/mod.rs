pub mod blog_list;
