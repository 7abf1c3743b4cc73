//! Static front page served at `/`

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>progression</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
  input { width: 100%; padding: .5rem; font-size: 1rem; }
  button { margin: .5rem .5rem .5rem 0; padding: .4rem .9rem; }
  pre { background: #f4f4f4; padding: .75rem; overflow-x: auto; }
</style>
</head>
<body>
<h1>Arithmetic sequence predictor</h1>
<p>Enter comma-separated numbers, for example <code>3, 6, 9, 12</code>.</p>
<input id="sequence" value="3, 6, 9, 12">
<div>
  <button onclick="predict()">Predict</button>
  <button onclick="validate()">Validate</button>
  <button onclick="memories()">Memories</button>
  <button onclick="clearMemories()">Clear</button>
</div>
<pre id="output"></pre>
<script>
function parse() {
  return document.getElementById('sequence').value.split(',').map(s => Number(s.trim()));
}
async function call(method, path, body) {
  const opts = { method, headers: { 'Content-Type': 'application/json' } };
  if (body !== undefined) opts.body = JSON.stringify(body);
  const res = await fetch(path, opts);
  document.getElementById('output').textContent = JSON.stringify(await res.json(), null, 2);
}
function predict() { call('POST', '/api/predict', { sequence: parse() }); }
function validate() { call('POST', '/api/validate', { sequence: parse() }); }
function memories() { call('GET', '/api/memories'); }
function clearMemories() { call('DELETE', '/api/memories'); }
</script>
</body>
</html>
"#;
